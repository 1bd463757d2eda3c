//! Core identifier types for the conference review simulation.
//!
//! This module defines the fundamental ID types used throughout the system
//! to uniquely identify items and reviewers. Every collection in the core
//! (bid map, review map, rating map, selection list) is keyed by one of
//! these IDs rather than by owning handles, so there is exactly one owner
//! for each record.

use derive_more::{Add, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a submitted item within a track.
///
/// Assigned sequentially at submission time, so ascending `ItemId` order
/// is submission order. Titles remain the user-facing identity; the ID is
/// the arena key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    From,
    Into,
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item#{}", self.0)
    }
}

/// Unique identifier for a reviewer attached to a track.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    From,
    Into,
)]
pub struct ReviewerId(pub u64);

impl fmt::Display for ReviewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reviewer#{}", self.0)
    }
}
