//! Pluggable selection strategies.
//!
//! A strategy is a pure function from the aggregate rating map and a
//! numeric threshold to the list of accepted items. The set of strategies
//! is closed, so it is a plain enum matched exhaustively rather than a
//! trait object.

use crate::error::{Result, TrackError};
use std::collections::HashMap;
use types::{ItemId, ReviewScore, StrategyKind};

/// How a track turns aggregate ratings into an accepted-item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Accept every item whose aggregate rating is at or above the
    /// threshold (a score in [-3, +3]).
    #[default]
    BestAboveThreshold,
    /// Accept the top `floor(n * threshold / 100)` items by rating,
    /// where the threshold is a percentage in (0, 100].
    FixedPercentageCut,
}

impl From<StrategyKind> for SelectionStrategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::BestAboveThreshold => SelectionStrategy::BestAboveThreshold,
            StrategyKind::FixedPercentageCut => SelectionStrategy::FixedPercentageCut,
        }
    }
}

impl SelectionStrategy {
    /// Run the strategy over `ratings`.
    ///
    /// The threshold's domain depends on the variant; a value outside it
    /// is a [`TrackError::ThresholdOutOfRange`] and nothing is clamped.
    /// An empty rating map always yields an empty result. The output is a
    /// subset of the rating map's key set.
    pub fn select(
        self,
        ratings: &HashMap<ItemId, ReviewScore>,
        threshold: i32,
    ) -> Result<Vec<ItemId>> {
        match self {
            SelectionStrategy::BestAboveThreshold => best_above_threshold(ratings, threshold),
            SelectionStrategy::FixedPercentageCut => fixed_percentage_cut(ratings, threshold),
        }
    }
}

/// Every item rated at or above `threshold`, in map-iteration order.
fn best_above_threshold(
    ratings: &HashMap<ItemId, ReviewScore>,
    threshold: i32,
) -> Result<Vec<ItemId>> {
    if !(-3..=3).contains(&threshold) {
        return Err(TrackError::ThresholdOutOfRange {
            value: threshold,
            min: -3,
            max: 3,
        });
    }

    Ok(ratings
        .iter()
        .filter(|(_, score)| i32::from(score.as_i8()) >= threshold)
        .map(|(id, _)| *id)
        .collect())
}

/// The top `floor(n * threshold / 100)` items by rating descending.
///
/// Ties are broken by submission order (ascending `ItemId`), which keeps
/// the cut deterministic. A computed count of zero is an empty result,
/// not an error.
fn fixed_percentage_cut(
    ratings: &HashMap<ItemId, ReviewScore>,
    threshold: i32,
) -> Result<Vec<ItemId>> {
    if !(1..=100).contains(&threshold) {
        return Err(TrackError::ThresholdOutOfRange {
            value: threshold,
            min: 1,
            max: 100,
        });
    }

    let count = ratings.len() * threshold as usize / 100;

    let mut ranked: Vec<(ItemId, ReviewScore)> =
        ratings.iter().map(|(id, score)| (*id, *score)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    Ok(ranked.into_iter().take(count).map(|(id, _)| id).collect())
}
