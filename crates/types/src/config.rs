//! Descriptor structs for external configuration.
//!
//! These are the serde-facing shapes a driver loads from a JSON document
//! and hands to the builder: users, reviewers, tracks, and the conference
//! itself. They carry no behavior; the core works on the built domain
//! types, never on descriptors.

use crate::item::{Item, ItemKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of reviewing pipeline a track runs, gating which item kinds it
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Full papers only.
    Regular,
    /// Mixed sessions: accepts both item kinds.
    Workshop,
    /// Posters only.
    Poster,
}

impl TrackKind {
    /// Whether a track of this kind accepts submissions of `kind`.
    pub fn accepts(self, kind: ItemKind) -> bool {
        match self {
            TrackKind::Regular => kind == ItemKind::Regular,
            TrackKind::Poster => kind == ItemKind::Poster,
            TrackKind::Workshop => true,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Regular => write!(f, "regular"),
            TrackKind::Workshop => write!(f, "workshop"),
            TrackKind::Poster => write!(f, "poster"),
        }
    }
}

/// Descriptor tag for the selection strategy a track should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Accept every item rated at or above the threshold.
    #[default]
    BestAboveThreshold,
    /// Accept the top percentage of items by rating.
    FixedPercentageCut,
}

/// A conference participant (chair or author).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSpec {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_chair: bool,
    #[serde(default)]
    pub is_author: bool,
}

/// A reviewer to attach to a track.
///
/// `seed` pins the reviewer's random source for reproducible runs; when
/// absent the builder derives one from its base seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerSpec {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One track: its kind, strategy, initial submissions, and reviewer panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub name: String,
    pub kind: TrackKind,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub reviewers: Vec<ReviewerSpec>,
}

/// The whole conference document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceSpec {
    pub name: String,
    /// Creation date, `YYYY-MM-DD`; parsed by the builder.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub chairs: Vec<UserSpec>,
    #[serde(default)]
    pub authors: Vec<UserSpec>,
    #[serde(default)]
    pub tracks: Vec<TrackSpec>,
}
