//! The metadata seam between the rendering engine and whatever supplies
//! song data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read access to one item's metadata.
///
/// Rendering only ever asks two questions: is a key present, and what is
/// its value. Presence is reported faithfully: a key holding an empty
/// string is still present, which is what keeps a conditional segment
/// alive while its value falls back to a default.
pub trait Metadata {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns true when `key` is present, even with an empty value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// An owned tag map for one song, stream or playlist entry.
///
/// Keys follow the daemon's tag names (`artist`, `title`, `file`, ...);
/// values are kept verbatim as strings. The map serializes transparently,
/// so a song is plain flat JSON:
///
/// ```rust
/// use playbill::{Metadata, Song};
///
/// let song: Song = serde_json::from_str(r#"{"artist": "Low", "title": "Plastic Cup"}"#).unwrap();
/// assert_eq!(song.get("artist"), Some("Low"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Song {
    tags: HashMap<String, String>,
}

impl Song {
    /// Creates a song with no tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, builder style.
    ///
    /// ```rust
    /// use playbill::Song;
    ///
    /// let song = Song::new().with("artist", "Low").with("title", "Plastic Cup");
    /// assert_eq!(song.tag("title"), Some("Plastic Cup"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Inserts or replaces a tag.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Returns the tag stored under `key`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Number of tags on this song.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the song carries no tags at all.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Metadata for Song {
    fn get(&self, key: &str) -> Option<&str> {
        self.tag(key)
    }
}

impl From<HashMap<String, String>> for Song {
    fn from(tags: HashMap<String, String>) -> Self {
        Song { tags }
    }
}

/// Plain string maps render directly; handy for tests and embedders that
/// already hold tag maps.
impl Metadata for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}
