//! Track-core: the lifecycle state machine of one reviewing pipeline.
//!
//! This crate provides the heart of the conference review simulation:
//! - The linear, chair-driven phase machine
//!   (`Reception → Bidding → Review → Selection`) with its operation
//!   legality table
//! - The `Track` aggregate owning items, bids, reviews, ratings, the
//!   reviewer panel, and the selection result
//! - Review assignment with quota-balanced round-robin and
//!   ceiling-of-mean rating aggregation
//! - The closed set of selection strategies
//! - Error handling for lifecycle operations
//!
//! # Example
//!
//! ```ignore
//! use track_core::{SelectionStrategy, Track};
//! use types::TrackKind;
//!
//! let mut track = Track::new("Systems", TrackKind::Regular)
//!     .with_strategy(SelectionStrategy::BestAboveThreshold);
//! track.submit_item(item)?;
//! track.advance_phase(); // Bidding
//! track.run_bidding()?;
//! track.advance_phase(); // Review
//! track.run_review()?;
//! track.advance_phase(); // Selection
//! let accepted = track.run_selection(1)?;
//! ```

mod assignment;
mod error;
mod phase;
mod selection;
mod track;

pub use assignment::{MIN_REVIEWER_QUOTA, reviewer_quota};
pub use error::{Result, TrackError};
pub use phase::{Operation, Phase};
pub use selection::SelectionStrategy;
pub use track::{ItemOutcome, RejectReason, Track};
