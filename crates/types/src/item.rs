//! Submitted items and their kind-specific payloads.
//!
//! An item is identified by its title (unique within a track) and carries a
//! kind-specific payload: regular submissions have an abstract, posters a
//! secondary attachment. Validity is a minimum-content rule checked once,
//! at submission time; an item that made it into a track is valid for the
//! rest of its life.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum abstract length, in characters, for a regular item to be valid.
pub const MIN_ABSTRACT_LEN: usize = 100;

/// Kind tag, used by tracks to gate which submissions they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Regular,
    Poster,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Regular => write!(f, "regular"),
            ItemKind::Poster => write!(f, "poster"),
        }
    }
}

/// Kind-specific payload of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemBody {
    /// A full submission with an abstract.
    Regular { abstract_text: String },
    /// A poster with a secondary attachment (the poster file itself).
    Poster { second_attachment: String },
}

impl ItemBody {
    /// Kind tag of this payload.
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemBody::Regular { .. } => ItemKind::Regular,
            ItemBody::Poster { .. } => ItemKind::Poster,
        }
    }
}

/// A submission: title, attached content reference, authors, and the
/// kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    title: String,
    #[serde(default)]
    attachment_url: String,
    authors: Vec<String>,
    #[serde(flatten)]
    body: ItemBody,
}

impl Item {
    /// Create a regular item.
    pub fn regular(
        title: impl Into<String>,
        attachment_url: impl Into<String>,
        authors: Vec<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            attachment_url: attachment_url.into(),
            authors,
            body: ItemBody::Regular {
                abstract_text: abstract_text.into(),
            },
        }
    }

    /// Create a poster item.
    pub fn poster(
        title: impl Into<String>,
        attachment_url: impl Into<String>,
        authors: Vec<String>,
        second_attachment: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            attachment_url: attachment_url.into(),
            authors,
            body: ItemBody::Poster {
                second_attachment: second_attachment.into(),
            },
        }
    }

    /// The item's title, which is its identity within a track.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The attached content reference (URL).
    pub fn attachment_url(&self) -> &str {
        &self.attachment_url
    }

    /// Author list.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Kind-specific payload.
    pub fn body(&self) -> &ItemBody {
        &self.body
    }

    /// Kind tag.
    pub fn kind(&self) -> ItemKind {
        self.body.kind()
    }

    /// Minimum-content validity rule for this item's kind.
    ///
    /// Regular: title, attachment, and at least one author, plus an
    /// abstract of at least [`MIN_ABSTRACT_LEN`] characters. Poster:
    /// title, at least one author, and a non-empty secondary attachment.
    pub fn is_valid(&self) -> bool {
        if self.title.is_empty() || self.authors.is_empty() {
            return false;
        }
        match &self.body {
            ItemBody::Regular { abstract_text } => {
                !self.attachment_url.is_empty() && abstract_text.len() >= MIN_ABSTRACT_LEN
            }
            ItemBody::Poster { second_attachment } => !second_attachment.is_empty(),
        }
    }

    /// Replace the mutable fields with those of `other`, keeping identity.
    ///
    /// Callers locate the target by title first; the title itself is
    /// carried over unchanged (it is the identity the caller matched on).
    pub fn update_from(&mut self, other: &Item) {
        self.attachment_url = other.attachment_url.clone();
        self.authors = other.authors.clone();
        self.body = other.body.clone();
    }
}
