//! Bid and review records.

use crate::ids::{ItemId, ReviewerId};
use crate::scale::{BidLevel, ReviewScore};
use serde::{Deserialize, Serialize};

/// One review of one item by one reviewer: free text plus a score on the
/// 7-point scale. Immutable once the review phase has advanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// The reviewed item.
    pub item: ItemId,
    /// The authoring reviewer.
    pub reviewer: ReviewerId,
    /// Free-text assessment.
    pub text: String,
    /// Verdict on the 7-point scale.
    pub score: ReviewScore,
}

impl Review {
    /// Create a review record.
    pub fn new(
        item: ItemId,
        reviewer: ReviewerId,
        text: impl Into<String>,
        score: ReviewScore,
    ) -> Self {
        Self {
            item,
            reviewer,
            text: text.into(),
            score,
        }
    }
}

/// A bid as remembered by the reviewer who placed it.
///
/// `level: None` records an explicit abstention ("no opinion"); the track's
/// bid map holds no entry for it, but the reviewer's history does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBid {
    /// The item bid on.
    pub item: ItemId,
    /// Declared interest, or `None` for an abstention.
    pub level: Option<BidLevel>,
}
