//! End-to-end run driver.
//!
//! Walks a loaded conference through its whole lifecycle: one clock tick
//! into Bidding (collect bids), one into Review (assign and aggregate),
//! one into Selection (run the strategy), then reports per track. A track
//! that fails a phase keeps its error in the report and the run continues
//! with the remaining tracks; nothing here aborts the process.

use crate::manager::ConferenceManager;
use tracing::warn;

/// What one track ended the run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Track name.
    pub track: String,
    /// Phase name the track finished in.
    pub phase: &'static str,
    /// Items held after Reception.
    pub items: usize,
    /// Live bids after the bidding round.
    pub bids: usize,
    /// Reviews collected.
    pub reviews: usize,
    /// Titles of the selected items.
    pub selected: Vec<String>,
    /// First hard error the track hit, if any.
    pub error: Option<String>,
}

/// Drive every track from Reception to Selection and report.
///
/// `threshold` is handed verbatim to each track's selection strategy; a
/// value outside a strategy's domain surfaces as that track's error.
pub fn run_to_selection(manager: &mut ConferenceManager, threshold: i32) -> Vec<RunReport> {
    let mut errors: Vec<Option<String>> =
        vec![None; manager.conference().track_count()];

    // Reception is already done: items entered at load time.
    manager.advance_phase();
    for (index, track) in manager.conference_mut().tracks_mut().iter_mut().enumerate() {
        if let Err(err) = track.run_bidding() {
            warn!(track = track.name(), %err, "bidding failed");
            errors[index].get_or_insert(err.to_string());
        }
    }

    manager.advance_phase();
    for (index, track) in manager.conference_mut().tracks_mut().iter_mut().enumerate() {
        if let Err(err) = track.run_review() {
            warn!(track = track.name(), %err, "review failed");
            errors[index].get_or_insert(err.to_string());
        }
    }

    manager.advance_phase();
    for (index, track) in manager.conference_mut().tracks_mut().iter_mut().enumerate() {
        if let Err(err) = track.run_selection(threshold) {
            warn!(track = track.name(), %err, "selection failed");
            errors[index].get_or_insert(err.to_string());
        }
    }

    manager
        .conference()
        .tracks()
        .iter()
        .zip(errors)
        .map(|(track, error)| RunReport {
            track: track.name().to_string(),
            phase: track.phase_name(),
            items: track.item_count(),
            bids: track.bid_count(),
            reviews: track.review_count(),
            selected: track
                .selected_titles()
                .into_iter()
                .map(str::to_string)
                .collect(),
            error,
        })
        .collect()
}
