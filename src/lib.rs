//! # paperdeck
//!
//! Core of a card-deck interface for browsing research papers: an ordered
//! deck advanced one card at a time by swipe gestures, over a pluggable
//! data source.
//!
//! ## Architecture
//!
//! - [`models`]: paper and paging data structures
//! - [`services`]: the [`PaperService`] trait with mock and remote variants
//! - [`deck`]: the deck controller — drag state machine, threshold commit,
//!   exit-then-advance ordering, and the pure card transform
//! - [`config`]: configuration and explicit service construction
//!
//! The presentation layer binds gestures and frames to the deck's
//! render-facing surface ([`Deck::current_card`], [`Deck::card_transform`],
//! and the action methods); it lives in the host, not here.

pub mod config;
pub mod deck;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use deck::{Deck, SwipeDirection, SwipeOutcome};
pub use models::{PagedResult, Paper, PaperId};
pub use services::{PaperService, ServiceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
