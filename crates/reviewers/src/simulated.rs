//! Simulated reviewer backed by a seedable random source.
//!
//! Stands in for a human reviewer in end-to-end runs: interest levels and
//! verdicts are drawn from an owned `StdRng`. Seeding the generator makes a
//! whole run reproducible, which the scenario tests rely on.

use crate::traits::{Reviewer, ReviewerState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use types::{BidLevel, Item, ItemId, Review, ReviewScore, ReviewerId};

/// Configuration for a [`RandomReviewer`].
#[derive(Debug, Clone)]
pub struct RandomReviewerConfig {
    /// Full name, unique within the track's panel.
    pub name: String,
    /// Affiliation, for display only.
    pub affiliation: String,
    /// Contact address, for display only.
    pub email: String,
}

impl Default for RandomReviewerConfig {
    fn default() -> Self {
        Self {
            name: "Anonymous Reviewer".to_string(),
            affiliation: String::new(),
            email: String::new(),
        }
    }
}

impl RandomReviewerConfig {
    /// Config with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A reviewer whose interest and verdicts are random.
///
/// Bidding draws uniformly from the four outcomes {abstain, not
/// interested, maybe, interested}; reviewing draws a uniform score across
/// the full 7-point scale.
pub struct RandomReviewer {
    /// Unique reviewer identifier.
    id: ReviewerId,
    /// Configuration.
    config: RandomReviewerConfig,
    /// Accumulated bid/review history.
    state: ReviewerState,
    /// Random number generator (Send-compatible).
    rng: StdRng,
}

impl RandomReviewer {
    /// Create a new RandomReviewer seeded from OS entropy.
    pub fn new(id: ReviewerId, config: RandomReviewerConfig) -> Self {
        Self {
            id,
            config,
            state: ReviewerState::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a RandomReviewer with a specific seed (for reproducible runs).
    pub fn with_seed(id: ReviewerId, config: RandomReviewerConfig, seed: u64) -> Self {
        Self {
            id,
            config,
            state: ReviewerState::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Affiliation, for summaries.
    pub fn affiliation(&self) -> &str {
        &self.config.affiliation
    }

    /// Contact address, for summaries.
    pub fn email(&self) -> &str {
        &self.config.email
    }
}

impl Reviewer for RandomReviewer {
    fn id(&self) -> ReviewerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn bid(&mut self, item: ItemId, _details: &Item) -> Option<BidLevel> {
        let level = match self.rng.random_range(0..4u8) {
            0 => None,
            1 => Some(BidLevel::NotInterested),
            2 => Some(BidLevel::Maybe),
            _ => Some(BidLevel::Interested),
        };
        self.state.record_bid(item, level);
        level
    }

    fn review(&mut self, item: ItemId, details: &Item) -> Review {
        let score = ReviewScore::from_clamped(self.rng.random_range(-3..=3i64));
        let text = format!(
            "I, {}, reviewed \"{}\" and found it {}.",
            self.config.name,
            details.title(),
            score
        );
        let review = Review::new(item, self.id, text, score);
        self.state.record_review(review.clone());
        review
    }

    fn state(&self) -> &ReviewerState {
        &self.state
    }
}
