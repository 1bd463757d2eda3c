//! Conference bookkeeping.
//!
//! A conference owns its participants and its tracks. It has no decision
//! logic of its own: everything interesting happens inside the tracks,
//! and the manager advances them together.

use chrono::NaiveDate;
use track_core::Track;
use types::UserSpec;

/// A conference participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub affiliation: String,
    pub email: String,
    pub is_chair: bool,
    pub is_author: bool,
}

impl From<UserSpec> for User {
    fn from(spec: UserSpec) -> Self {
        Self {
            name: spec.name,
            affiliation: spec.affiliation,
            email: spec.email,
            is_chair: spec.is_chair,
            is_author: spec.is_author,
        }
    }
}

/// One conference: participants, creation date, and its tracks.
pub struct Conference {
    name: String,
    created_at: Option<NaiveDate>,
    chairs: Vec<User>,
    authors: Vec<User>,
    tracks: Vec<Track>,
}

impl std::fmt::Debug for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conference")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .field("chairs", &self.chairs)
            .field("authors", &self.authors)
            .field("tracks", &self.tracks.len())
            .finish()
    }
}

impl Conference {
    /// Create an empty conference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: None,
            chairs: Vec::new(),
            authors: Vec::new(),
            tracks: Vec::new(),
        }
    }

    /// Set the creation date.
    pub fn with_created_at(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    /// Conference name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation date, when known.
    pub fn created_at(&self) -> Option<NaiveDate> {
        self.created_at
    }

    /// Add a chair.
    pub fn add_chair(&mut self, user: User) {
        self.chairs.push(user);
    }

    /// Add an author.
    pub fn add_author(&mut self, user: User) {
        self.authors.push(user);
    }

    /// Add a track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Chairs of the conference.
    pub fn chairs(&self) -> &[User] {
        &self.chairs
    }

    /// Authors registered with the conference.
    pub fn authors(&self) -> &[User] {
        &self.authors
    }

    /// Number of tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Tracks, in creation order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Mutable access to the tracks.
    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::TrackKind;

    #[test]
    fn test_conference_holds_tracks_and_users() {
        let mut conference = Conference::new("Systems Conf")
            .with_created_at(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        conference.add_chair(User::from(UserSpec {
            name: "Ada".into(),
            affiliation: String::new(),
            email: String::new(),
            is_chair: true,
            is_author: false,
        }));
        conference.add_track(Track::new("Main", TrackKind::Regular));

        assert_eq!(conference.name(), "Systems Conf");
        assert_eq!(conference.chairs().len(), 1);
        assert_eq!(conference.track_count(), 1);
        assert!(conference.created_at().is_some());
    }
}
