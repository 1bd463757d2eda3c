//! Loading a conference from its JSON document.
//!
//! The loader is thin on purpose: parse the descriptor document, then
//! build the domain objects through their normal APIs. Items enter each
//! track through the Reception-phase submission gate, so validity and
//! kind checks apply at load exactly as they would for a live submission.

use crate::conference::{Conference, User};
use chrono::NaiveDate;
use reviewers::{RandomReviewer, RandomReviewerConfig};
use std::fmt;
use std::fs;
use std::path::Path;
use track_core::{ItemOutcome, Track, TrackError};
use tracing::{info, warn};
use types::{ConferenceSpec, ReviewerId, TrackSpec};

/// Errors raised while loading a conference document.
///
/// These happen before the core runs and are the only failures that may
/// abort the whole process.
#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be read.
    Io(std::io::Error),
    /// The document is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// A creation date that is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// A track operation failed during the build.
    Track(TrackError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "cannot read conference document: {}", err),
            LoadError::Json(err) => write!(f, "malformed conference document: {}", err),
            LoadError::InvalidDate(value) => {
                write!(f, "invalid creation date '{}', expected YYYY-MM-DD", value)
            }
            LoadError::Track(err) => write!(f, "building a track failed: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Json(err) => Some(err),
            LoadError::Track(err) => Some(err),
            LoadError::InvalidDate(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

impl From<TrackError> for LoadError {
    fn from(err: TrackError) -> Self {
        LoadError::Track(err)
    }
}

/// Read and build a conference from a JSON file.
///
/// `base_seed` seeds the simulated reviewers that do not pin their own
/// seed, keeping a whole run reproducible from one number.
pub fn load_conference(path: &Path, base_seed: u64) -> Result<Conference, LoadError> {
    let document = fs::read_to_string(path)?;
    let spec: ConferenceSpec = serde_json::from_str(&document)?;
    build_conference(spec, base_seed)
}

/// Build a conference from an already-parsed descriptor.
pub fn build_conference(spec: ConferenceSpec, base_seed: u64) -> Result<Conference, LoadError> {
    let mut conference = Conference::new(spec.name);
    if let Some(raw) = spec.created_at {
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| LoadError::InvalidDate(raw))?;
        conference = conference.with_created_at(date);
    }

    for chair in spec.chairs {
        conference.add_chair(User::from(chair));
    }
    for author in spec.authors {
        conference.add_author(User::from(author));
    }

    for track_spec in spec.tracks {
        conference.add_track(build_track(track_spec, base_seed)?);
    }

    info!(
        conference = conference.name(),
        tracks = conference.track_count(),
        "conference loaded"
    );
    Ok(conference)
}

fn build_track(spec: TrackSpec, base_seed: u64) -> Result<Track, LoadError> {
    let mut track = Track::new(spec.name, spec.kind).with_strategy(spec.strategy.into());

    for (index, reviewer_spec) in spec.reviewers.into_iter().enumerate() {
        let seed = reviewer_spec
            .seed
            .unwrap_or_else(|| base_seed.wrapping_add(index as u64));
        let config = RandomReviewerConfig {
            name: reviewer_spec.name,
            affiliation: reviewer_spec.affiliation,
            email: reviewer_spec.email,
        };
        track.attach_reviewer(Box::new(RandomReviewer::with_seed(
            ReviewerId(index as u64),
            config,
            seed,
        )));
    }

    let mut rejected = 0usize;
    for item in spec.items {
        match track.submit_item(item)? {
            ItemOutcome::Applied => {}
            outcome => {
                rejected += 1;
                warn!(track = track.name(), ?outcome, "item dropped at load");
            }
        }
    }
    if rejected > 0 {
        warn!(track = track.name(), rejected, "submissions rejected at load");
    }

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use track_core::Phase;
    use types::TrackKind;

    fn sample_spec() -> ConferenceSpec {
        serde_json::from_str(
            r#"
            {
                "name": "Loaded Conf",
                "created_at": "2026-03-01",
                "chairs": [{ "name": "Ada", "is_chair": true }],
                "authors": [{ "name": "Grace", "is_author": true }],
                "tracks": [
                    {
                        "name": "Posters",
                        "kind": "poster",
                        "items": [
                            {
                                "title": "A Poster",
                                "authors": ["Grace"],
                                "kind": "poster",
                                "second_attachment": "https://example.org/p.png"
                            },
                            {
                                "title": "Broken Poster",
                                "authors": ["Grace"],
                                "kind": "poster",
                                "second_attachment": ""
                            }
                        ],
                        "reviewers": [{ "name": "Rev One" }, { "name": "Rev Two", "seed": 3 }]
                    }
                ]
            }
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_applies_the_reception_gate() {
        let conference = build_conference(sample_spec(), 42).unwrap();
        assert_eq!(conference.track_count(), 1);
        let track = &conference.tracks()[0];
        assert_eq!(track.kind(), TrackKind::Poster);
        assert_eq!(track.phase(), Phase::Reception);
        // The invalid poster was dropped at the gate.
        assert_eq!(track.item_count(), 1);
        assert_eq!(track.reviewer_count(), 2);
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let mut spec = sample_spec();
        spec.created_at = Some("March 1st".into());
        let err = build_conference(spec, 42).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate(_)));
    }
}
