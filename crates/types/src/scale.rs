//! Rating and bidding scales.
//!
//! Two ordered scales drive the whole pipeline: the reviewer's declared
//! interest in an item (`BidLevel`) and the verdict a review assigns to it
//! (`ReviewScore`). Both are closed enums; arithmetic happens on their
//! integer projections and converts back through clamping constructors.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Bid interest scale
// =============================================================================

/// A reviewer's declared interest in reviewing an item.
///
/// Ordered `NotInterested < Maybe < Interested`. "No opinion" is not a
/// level: a bidding callback returns `Option<BidLevel>` and `None` means
/// the reviewer abstains (an existing bid, if any, is withdrawn).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BidLevel {
    NotInterested,
    Maybe,
    Interested,
}

impl BidLevel {
    /// Numeric weight used when aggregating bid strength per item.
    #[inline]
    pub fn weight(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for BidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BidLevel::NotInterested => "not interested",
            BidLevel::Maybe => "maybe",
            BidLevel::Interested => "interested",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Review score scale
// =============================================================================

/// Verdict on a 7-point symmetric scale, `NotRecommended` (-3) up to
/// `Excellent` (+3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i8)]
pub enum ReviewScore {
    NotRecommended = -3,
    VeryBad = -2,
    Bad = -1,
    Neutral = 0,
    Good = 1,
    VeryGood = 2,
    Excellent = 3,
}

impl ReviewScore {
    /// Smallest value on the scale.
    pub const MIN: ReviewScore = ReviewScore::NotRecommended;
    /// Largest value on the scale.
    pub const MAX: ReviewScore = ReviewScore::Excellent;

    /// Integer projection in [-3, +3].
    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Build a score from an integer, clamping to the valid range.
    ///
    /// Used by rating aggregation, where a ceiling-of-mean can only fall
    /// inside the range anyway; the clamp keeps the conversion total.
    pub fn from_clamped(value: i64) -> ReviewScore {
        match value.clamp(-3, 3) {
            -3 => ReviewScore::NotRecommended,
            -2 => ReviewScore::VeryBad,
            -1 => ReviewScore::Bad,
            0 => ReviewScore::Neutral,
            1 => ReviewScore::Good,
            2 => ReviewScore::VeryGood,
            _ => ReviewScore::Excellent,
        }
    }
}

impl fmt::Display for ReviewScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReviewScore::NotRecommended => "not recommended",
            ReviewScore::VeryBad => "very bad",
            ReviewScore::Bad => "bad",
            ReviewScore::Neutral => "neutral",
            ReviewScore::Good => "good",
            ReviewScore::VeryGood => "very good",
            ReviewScore::Excellent => "excellent",
        };
        write!(f, "{}", label)
    }
}
