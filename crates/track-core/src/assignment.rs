//! Review assignment and rating aggregation.
//!
//! Invoked from the review phase: partitions the submitted items across
//! the attached reviewers, collects one review per assignment, and folds
//! the per-item scores into an aggregate rating.
//!
//! Assignment order favors interest: items are sorted by total bid weight
//! descending (stable on submission order), then dealt round-robin across
//! the reviewer panel. Every reviewer takes items until it reaches its
//! quota; once the whole panel is saturated, remaining items keep going
//! round-robin regardless of quota, so no item is ever left unassigned.

use crate::error::{Result, TrackError};
use reviewers::Reviewer;
use std::collections::HashMap;
use types::{BidLevel, Item, ItemId, Review, ReviewScore, ReviewerId};

/// Minimum number of items a reviewer accepts before counting as
/// saturated, regardless of how few items the track received.
pub const MIN_REVIEWER_QUOTA: usize = 3;

/// Per-reviewer quota: `max(3, ceil(items / reviewers))`.
pub fn reviewer_quota(item_count: usize, reviewer_count: usize) -> usize {
    MIN_REVIEWER_QUOTA.max(item_count.div_ceil(reviewer_count))
}

/// Everything one review round produces: the collected reviews and the
/// aggregate rating for every item that received at least one review.
#[derive(Debug, Default)]
pub struct ReviewRound {
    pub reviews: HashMap<ItemId, Vec<Review>>,
    pub ratings: HashMap<ItemId, ReviewScore>,
}

/// Total bid weight an item attracted across the panel.
fn bid_strength(item: ItemId, bids: &HashMap<ItemId, HashMap<ReviewerId, BidLevel>>) -> u32 {
    bids.get(&item)
        .map(|per_reviewer| per_reviewer.values().map(|level| level.weight()).sum())
        .unwrap_or(0)
}

/// Deal items (already sorted by bid strength) to reviewer slots.
///
/// Returns one item list per reviewer, in panel order. Separated from the
/// callback-driven part so the deterministic planning is testable on its
/// own.
fn plan_assignments(ordered: &[ItemId], reviewer_count: usize, quota: usize) -> Vec<Vec<ItemId>> {
    let mut plan = vec![Vec::new(); reviewer_count];
    let mut cursor = 0usize;

    for &item in ordered {
        // First reviewer from the cursor with quota headroom; when the
        // whole panel is saturated, the cursor position itself takes it.
        let mut slot = cursor;
        for offset in 0..reviewer_count {
            let candidate = (cursor + offset) % reviewer_count;
            if plan[candidate].len() < quota {
                slot = candidate;
                break;
            }
        }
        plan[slot].push(item);
        cursor = (slot + 1) % reviewer_count;
    }

    plan
}

/// Assign every item to a reviewer, collect the reviews, and aggregate
/// ratings.
///
/// Fails with [`TrackError::NoReviewers`] when the panel is empty; the
/// quota arithmetic never runs in that case.
pub fn assign_and_review(
    items: &[(ItemId, &Item)],
    bids: &HashMap<ItemId, HashMap<ReviewerId, BidLevel>>,
    reviewers: &mut [Box<dyn Reviewer>],
) -> Result<ReviewRound> {
    if reviewers.is_empty() {
        return Err(TrackError::NoReviewers);
    }

    let quota = reviewer_quota(items.len(), reviewers.len());

    // Stable sort: equal-strength items keep submission order.
    let mut ordered: Vec<ItemId> = items.iter().map(|(id, _)| *id).collect();
    ordered.sort_by_key(|id| std::cmp::Reverse(bid_strength(*id, bids)));

    let plan = plan_assignments(&ordered, reviewers.len(), quota);

    let details: HashMap<ItemId, &Item> = items.iter().map(|(id, item)| (*id, *item)).collect();

    let mut round = ReviewRound::default();
    for (reviewer, assigned) in reviewers.iter_mut().zip(&plan) {
        for &item in assigned {
            let review = reviewer.review(item, details[&item]);
            round.reviews.entry(item).or_default().push(review);
        }
    }

    round.ratings = aggregate_ratings(&round.reviews);
    Ok(round)
}

/// Aggregate rating per item: ceiling of the mean score, clamped to the
/// scale.
fn aggregate_ratings(reviews: &HashMap<ItemId, Vec<Review>>) -> HashMap<ItemId, ReviewScore> {
    reviews
        .iter()
        .filter(|(_, item_reviews)| !item_reviews.is_empty())
        .map(|(item, item_reviews)| {
            let sum: i64 = item_reviews
                .iter()
                .map(|review| i64::from(review.score.as_i8()))
                .sum();
            let mean_ceil = ceil_div(sum, item_reviews.len() as i64);
            (*item, ReviewScore::from_clamped(mean_ceil))
        })
        .collect()
}

/// Ceiling division for a possibly negative numerator and positive
/// denominator.
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1).div_euclid(denominator)
}
