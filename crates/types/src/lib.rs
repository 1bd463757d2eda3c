//! Core types for the conference review simulation.
//!
//! This crate provides the vocabulary shared by every other crate:
//! - Identifier newtypes for items, reviewers, and tracks
//! - The bid-interest and 7-point review scales
//! - The item model (kind-tagged payloads + minimum-content validity)
//! - Bid and review records
//! - Serde descriptors for external configuration documents

pub mod config;
mod ids;
mod item;
mod review;
mod scale;

pub use config::{ConferenceSpec, ReviewerSpec, StrategyKind, TrackKind, TrackSpec, UserSpec};
pub use ids::{ItemId, ReviewerId};
pub use item::{Item, ItemBody, ItemKind, MIN_ABSTRACT_LEN};
pub use review::{PlacedBid, Review};
pub use scale::{BidLevel, ReviewScore};
