//! Animation seam between gesture resolution and cursor advance.
//!
//! The commit path is "animate, await completion, then mutate cursor", so
//! the driver is a trait: production hosts use [`TimedDriver`] against real
//! frame time, tests use [`InstantDriver`] and keep the same ordering
//! without timing mocks.

use std::time::Duration;

use async_trait::async_trait;

use super::SwipeDirection;

/// Duration of the committed-card exit animation.
pub const EXIT_DURATION: Duration = Duration::from_millis(250);

/// Settle time for the spring-back on a cancelled swipe. The spring has no
/// fixed duration contract; this is the driver's choice.
pub const SPRING_SETTLE: Duration = Duration::from_millis(300);

/// Runs the visual animations the deck waits on.
#[async_trait]
pub trait AnimationDriver: Send + Sync + std::fmt::Debug {
    /// Animate the top card fully off-screen in `direction`.
    async fn exit(&self, direction: SwipeDirection);

    /// Animate the top card back to its resting position.
    async fn spring_back(&self);
}

/// Driver that takes real time, matching the on-screen animation.
#[derive(Debug, Clone)]
pub struct TimedDriver {
    exit: Duration,
    settle: Duration,
}

impl TimedDriver {
    pub fn new() -> Self {
        Self {
            exit: EXIT_DURATION,
            settle: SPRING_SETTLE,
        }
    }

    /// Override the durations, e.g. to match a host animation curve.
    pub fn with_durations(exit: Duration, settle: Duration) -> Self {
        Self { exit, settle }
    }
}

impl Default for TimedDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimationDriver for TimedDriver {
    async fn exit(&self, direction: SwipeDirection) {
        tracing::debug!(?direction, "exit animation");
        tokio::time::sleep(self.exit).await;
    }

    async fn spring_back(&self) {
        tracing::debug!("spring-back animation");
        tokio::time::sleep(self.settle).await;
    }
}

/// Driver that completes immediately. Used in tests and headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDriver;

#[async_trait]
impl AnimationDriver for InstantDriver {
    async fn exit(&self, _direction: SwipeDirection) {}

    async fn spring_back(&self) {}
}
