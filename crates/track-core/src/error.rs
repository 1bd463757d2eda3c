//! Error types for track-core operations.

use crate::phase::{Operation, Phase};
use std::fmt;

/// Result type for track-core operations.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Errors that can occur while driving a track through its lifecycle.
///
/// These are the hard failures: every variant is fatal to the call that
/// produced it, and the caller decides whether to abort the run or carry
/// on with the next track. Soft outcomes (validity rejections, lookup
/// misses) are not errors; see `ItemOutcome` in the track module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Operation attempted in a phase whose legality table forbids it.
    PhaseViolation {
        operation: Operation,
        phase: Phase,
    },
    /// A selection threshold outside the strategy's valid domain.
    ThresholdOutOfRange { value: i32, min: i32, max: i32 },
    /// Review assignment invoked with no reviewers attached.
    NoReviewers,
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::PhaseViolation { operation, phase } => {
                write!(f, "cannot {} in the {} phase", operation, phase)
            }
            TrackError::ThresholdOutOfRange { value, min, max } => {
                write!(
                    f,
                    "selection threshold {} is outside the valid range {}..={}",
                    value, min, max
                )
            }
            TrackError::NoReviewers => {
                write!(f, "review assignment requires at least one reviewer")
            }
        }
    }
}

impl std::error::Error for TrackError {}
