//! Card deck controller: cursor, drag state machine, and swipe resolution.
//!
//! The deck owns the session's ordered paper list, the cursor into it, and
//! the transient drag offset. A continuous drag becomes a discrete decision
//! in [`Deck::end_drag`]: past the threshold the card exits and the cursor
//! advances, otherwise the card springs back and nothing moves. The cursor
//! never advances before the exit animation has completed, so each gesture
//! always targets one definite card.

mod animate;
mod transform;

pub use animate::{AnimationDriver, InstantDriver, TimedDriver, EXIT_DURATION, SPRING_SETTLE};
pub use transform::{card_transform, CardTransform, DragOffset, MAX_ROTATION_DEG};

use std::sync::Arc;

use crate::models::Paper;
use crate::services::{PaperService, ServiceError};

/// Horizontal drag distance (logical px) past which a release commits.
pub const SWIPE_THRESHOLD: f32 = 120.0;

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dislike
    Left,
    /// Like
    Right,
}

/// What a finished gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The drag crossed the threshold; the card exited and the cursor advanced.
    Committed(SwipeDirection),
    /// The drag fell short (or there was nothing to swipe); same card on top.
    Cancelled,
}

/// Interaction phase of the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Idle,
    Dragging,
    Resetting,
    Exiting(SwipeDirection),
}

/// The session-scoped deck of papers being browsed one at a time.
///
/// Single-owner: every mutation goes through `&mut self`, and the only
/// suspension points are the initial load, the awaited animations, and the
/// like side channel. Dropping the deck discards the session.
#[derive(Debug)]
pub struct Deck {
    items: Vec<Paper>,
    cursor: usize,
    drag: DragOffset,
    phase: CardPhase,
    viewport_width: f32,
    service: Arc<dyn PaperService>,
    driver: Arc<dyn AnimationDriver>,
}

impl Deck {
    /// Build a deck over an already-loaded list.
    pub fn new(
        items: Vec<Paper>,
        viewport_width: f32,
        service: Arc<dyn PaperService>,
        driver: Arc<dyn AnimationDriver>,
    ) -> Self {
        Self {
            items,
            cursor: 0,
            drag: DragOffset::ORIGIN,
            phase: CardPhase::Idle,
            viewport_width,
            service,
            driver,
        }
    }

    /// Load a deck with a single forward fetch from `service`.
    ///
    /// A failed fetch is returned to the host, which is responsible for
    /// showing an error state instead of an empty deck.
    pub async fn load(
        service: Arc<dyn PaperService>,
        per_page: u32,
        viewport_width: f32,
        driver: Arc<dyn AnimationDriver>,
    ) -> Result<Self, ServiceError> {
        let page = service.list_papers(1, per_page).await?;
        tracing::info!(
            source = service.id(),
            count = page.papers.len(),
            total = page.total,
            "deck loaded"
        );
        Ok(Self::new(page.papers, viewport_width, service, driver))
    }

    /// The paper on top of the deck, or `None` once exhausted.
    pub fn current_card(&self) -> Option<&Paper> {
        self.items.get(self.cursor)
    }

    /// Whether the cursor has run past the end of the loaded list.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// Index of the current card within the session's list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of papers loaded for this session.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the session loaded no papers at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cards left to browse, including the current one.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor.min(self.items.len())
    }

    /// Current interaction phase of the top card.
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Latest drag offset.
    pub fn drag_offset(&self) -> DragOffset {
        self.drag
    }

    /// Visual transform for the top card at the current offset.
    pub fn card_transform(&self) -> CardTransform {
        transform::card_transform(self.drag, self.viewport_width)
    }

    /// Mark the top card as actively dragging. Idempotent while dragging;
    /// ignored when exhausted.
    pub fn begin_drag(&mut self) {
        if self.is_exhausted() {
            tracing::debug!("begin_drag ignored: deck exhausted");
            return;
        }
        if matches!(self.phase, CardPhase::Idle | CardPhase::Dragging) {
            self.phase = CardPhase::Dragging;
        }
    }

    /// Record the latest pointer delta. Runs once per input sample: O(1),
    /// no allocation, never awaits. Ignored outside an active drag.
    pub fn update_drag(&mut self, dx: f32, dy: f32) {
        if self.phase == CardPhase::Dragging {
            self.drag = DragOffset::new(dx, dy);
        }
    }

    /// Resolve the gesture from its final delta.
    ///
    /// Past `SWIPE_THRESHOLD` to the right commits a like, past it to the
    /// left a dislike; anything else springs the card back. The commit path
    /// awaits the exit animation before the cursor moves.
    pub async fn end_drag(&mut self, dx: f32, dy: f32) -> SwipeOutcome {
        if self.phase != CardPhase::Dragging {
            return SwipeOutcome::Cancelled;
        }
        self.drag = DragOffset::new(dx, dy);

        if dx > SWIPE_THRESHOLD {
            self.commit(SwipeDirection::Right).await
        } else if dx < -SWIPE_THRESHOLD {
            self.commit(SwipeDirection::Left).await
        } else {
            self.phase = CardPhase::Resetting;
            self.driver.spring_back().await;
            self.drag = DragOffset::ORIGIN;
            self.phase = CardPhase::Idle;
            SwipeOutcome::Cancelled
        }
    }

    /// Commit the current card without a drag, as the like/dislike buttons
    /// do. No threshold involved; same exit-then-advance path as a swipe.
    pub async fn swipe_current(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        if self.is_exhausted() || self.phase != CardPhase::Idle {
            return SwipeOutcome::Cancelled;
        }
        self.commit(direction).await
    }

    async fn commit(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        self.phase = CardPhase::Exiting(direction);
        // The card must be fully off-screen before the next card becomes
        // current, so the advance waits on the animation.
        self.driver.exit(direction).await;

        if let Some(paper) = self.items.get(self.cursor) {
            match direction {
                SwipeDirection::Right => tracing::info!(title = %paper.title, "liked paper"),
                SwipeDirection::Left => tracing::info!(title = %paper.title, "disliked paper"),
            }
        }

        self.cursor += 1;
        self.drag = DragOffset::ORIGIN;
        self.phase = CardPhase::Idle;
        SwipeOutcome::Committed(direction)
    }

    /// Like the current card without advancing the cursor.
    ///
    /// Forwards to the service when it supports likes, otherwise a logged
    /// no-op. A no-op when the deck is exhausted.
    pub async fn like_current(&self) -> Result<(), ServiceError> {
        let Some(paper) = self.current_card() else {
            tracing::debug!("like ignored: deck exhausted");
            return Ok(());
        };
        if self.service.supports_likes() {
            self.service.like_paper(&paper.id).await
        } else {
            tracing::debug!(paper = %paper.id, "like unavailable on this source");
            Ok(())
        }
    }

    /// Remove a like from the current card. Same forwarding rules as
    /// [`like_current`](Deck::like_current).
    pub async fn unlike_current(&self) -> Result<(), ServiceError> {
        let Some(paper) = self.current_card() else {
            tracing::debug!("unlike ignored: deck exhausted");
            return Ok(());
        };
        if self.service.supports_likes() {
            self.service.unlike_paper(&paper.id).await
        } else {
            tracing::debug!(paper = %paper.id, "unlike unavailable on this source");
            Ok(())
        }
    }

    /// Share the current card. No service capability exists for sharing;
    /// this logs for diagnostics and never advances the cursor.
    pub fn share_current(&self) {
        match self.current_card() {
            Some(paper) => tracing::info!(title = %paper.title, "shared paper"),
            None => tracing::debug!("share ignored: deck exhausted"),
        }
    }

    /// Bookmark the current card. Same contract as
    /// [`share_current`](Deck::share_current).
    pub fn bookmark_current(&self) {
        match self.current_card() {
            Some(paper) => tracing::info!(title = %paper.title, "bookmarked paper"),
            None => tracing::debug!("bookmark ignored: deck exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockPaperService;

    const W: f32 = 400.0;

    async fn make_deck() -> Deck {
        let service = Arc::new(MockPaperService::new());
        Deck::load(service, 10, W, Arc::new(InstantDriver))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_commit_right_past_threshold() {
        let mut deck = make_deck().await;

        deck.begin_drag();
        deck.update_drag(60.0, 5.0);
        let outcome = deck.end_drag(SWIPE_THRESHOLD + 1.0, 5.0).await;

        assert_eq!(outcome, SwipeOutcome::Committed(SwipeDirection::Right));
        assert_eq!(deck.cursor(), 1);
        assert!(deck.drag_offset().is_origin());
        assert_eq!(deck.phase(), CardPhase::Idle);
    }

    #[tokio::test]
    async fn test_commit_left_past_threshold() {
        let mut deck = make_deck().await;

        deck.begin_drag();
        let outcome = deck.end_drag(-(SWIPE_THRESHOLD + 1.0), 0.0).await;

        assert_eq!(outcome, SwipeOutcome::Committed(SwipeDirection::Left));
        assert_eq!(deck.cursor(), 1);
    }

    #[tokio::test]
    async fn test_short_drag_cancels() {
        let mut deck = make_deck().await;
        let top_before = deck.current_card().unwrap().id.clone();

        deck.begin_drag();
        deck.update_drag(50.0, 10.0);
        let outcome = deck.end_drag(50.0, 10.0).await;

        assert_eq!(outcome, SwipeOutcome::Cancelled);
        assert_eq!(deck.cursor(), 0);
        assert!(deck.drag_offset().is_origin());
        assert_eq!(deck.current_card().unwrap().id, top_before);
    }

    #[tokio::test]
    async fn test_exact_threshold_cancels() {
        // The commit condition is strict: |dx| must exceed the threshold.
        let mut deck = make_deck().await;

        deck.begin_drag();
        assert_eq!(
            deck.end_drag(SWIPE_THRESHOLD, 0.0).await,
            SwipeOutcome::Cancelled
        );

        deck.begin_drag();
        assert_eq!(
            deck.end_drag(-SWIPE_THRESHOLD, 0.0).await,
            SwipeOutcome::Cancelled
        );
        assert_eq!(deck.cursor(), 0);
    }

    #[tokio::test]
    async fn test_begin_drag_idempotent() {
        let mut deck = make_deck().await;

        deck.begin_drag();
        deck.update_drag(10.0, 0.0);
        deck.begin_drag();

        assert_eq!(deck.phase(), CardPhase::Dragging);
        assert_eq!(deck.drag_offset(), DragOffset::new(10.0, 0.0));
    }

    #[tokio::test]
    async fn test_update_drag_ignored_when_idle() {
        let mut deck = make_deck().await;

        deck.update_drag(500.0, 0.0);

        assert!(deck.drag_offset().is_origin());
    }

    #[tokio::test]
    async fn test_end_drag_without_begin_is_cancelled() {
        let mut deck = make_deck().await;

        let outcome = deck.end_drag(500.0, 0.0).await;

        assert_eq!(outcome, SwipeOutcome::Cancelled);
        assert_eq!(deck.cursor(), 0);
    }

    #[tokio::test]
    async fn test_swipe_current_advances_without_drag() {
        let mut deck = make_deck().await;

        let outcome = deck.swipe_current(SwipeDirection::Right).await;

        assert_eq!(outcome, SwipeOutcome::Committed(SwipeDirection::Right));
        assert_eq!(deck.cursor(), 1);
    }

    #[tokio::test]
    async fn test_deck_exhaustion_guards_all_actions() {
        let mut deck = make_deck().await;
        let total = deck.len();

        for _ in 0..total {
            deck.begin_drag();
            deck.end_drag(SWIPE_THRESHOLD + 50.0, 0.0).await;
        }
        assert!(deck.is_exhausted());
        assert!(deck.current_card().is_none());

        // Nothing past this point may move the cursor or read out of bounds.
        deck.begin_drag();
        deck.update_drag(400.0, 0.0);
        assert_eq!(
            deck.end_drag(400.0, 0.0).await,
            SwipeOutcome::Cancelled
        );
        assert_eq!(
            deck.swipe_current(SwipeDirection::Left).await,
            SwipeOutcome::Cancelled
        );
        deck.like_current().await.unwrap();
        deck.share_current();
        deck.bookmark_current();

        assert_eq!(deck.cursor(), total);
        assert!(deck.drag_offset().is_origin());
    }

    #[tokio::test]
    async fn test_like_current_does_not_advance() {
        let deck = make_deck().await;

        deck.like_current().await.unwrap();
        deck.unlike_current().await.unwrap();

        assert_eq!(deck.cursor(), 0);
    }

    #[tokio::test]
    async fn test_like_is_noop_without_capability() {
        use crate::services::RemotePaperService;

        // Remote has no likes capability; the deck logs and moves on
        // instead of surfacing NotImplemented.
        let service = Arc::new(RemotePaperService::new("http://localhost:1"));
        let papers = vec![Paper::new(1u64, "A", "a", "J", 2020)];
        let deck = Deck::new(papers, W, service, Arc::new(InstantDriver));

        assert!(deck.like_current().await.is_ok());
        assert!(deck.unlike_current().await.is_ok());
    }

    #[tokio::test]
    async fn test_card_transform_tracks_drag() {
        let mut deck = make_deck().await;

        deck.begin_drag();
        deck.update_drag(0.75 * 1.5 * W, 0.0);

        let t = deck.card_transform();
        assert_eq!(t.translate_x, 0.75 * 1.5 * W);
        assert!((t.rotation_deg - 0.75 * MAX_ROTATION_DEG).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_load_failure_surfaces() {
        use crate::services::RemotePaperService;

        // Nothing listens on this port; the load must fail loudly.
        let service = Arc::new(RemotePaperService::new("http://127.0.0.1:1"));
        let result = Deck::load(service, 10, W, Arc::new(InstantDriver)).await;

        assert!(result.is_err());
    }
}
