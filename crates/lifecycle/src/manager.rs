//! Phase orchestration across a conference's tracks.
//!
//! The chair advances the conference clock; the manager translates each
//! tick into one phase advance on every track. Tracks never advance
//! themselves.

use crate::conference::Conference;
use track_core::Phase;
use tracing::info;

/// Drives the lifecycle of every track in a conference.
pub struct ConferenceManager {
    conference: Conference,
}

impl ConferenceManager {
    /// Take ownership of a conference to manage.
    pub fn new(conference: Conference) -> Self {
        Self { conference }
    }

    /// The managed conference.
    pub fn conference(&self) -> &Conference {
        &self.conference
    }

    /// Mutable access to the managed conference.
    pub fn conference_mut(&mut self) -> &mut Conference {
        &mut self.conference
    }

    /// Give the conference back.
    pub fn into_inner(self) -> Conference {
        self.conference
    }

    /// Advance every track one phase.
    ///
    /// Returns the phase each track ended up in, in track order. Tracks
    /// already in the terminal phase stay there.
    pub fn advance_phase(&mut self) -> Vec<Phase> {
        let phases: Vec<Phase> = self
            .conference
            .tracks_mut()
            .iter_mut()
            .map(|track| track.advance_phase())
            .collect();
        info!(conference = self.conference.name(), ?phases, "conference clock advanced");
        phases
    }
}
