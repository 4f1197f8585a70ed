use serde::{Deserialize, Serialize};

/// A single album in a collection
///
/// Field order is the on-disk column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Unique within its collection, never reused
    pub id: u32,

    pub title: String,

    pub artist: String,

    pub genre: String,

    /// Physical or digital format (Vinyl, CD, FLAC, ...)
    pub format: String,

    pub track_count: u32,

    pub year: u32,
}

/// User-supplied album fields, without an ID
///
/// Used as-is when adding. When updating, an empty string or a zero
/// leaves the existing value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub format: String,
    pub track_count: u32,
    pub year: u32,
}

impl AlbumDraft {
    /// Create a draft with every field set
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        format: impl Into<String>,
        track_count: u32,
        year: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            format: format.into(),
            track_count,
            year,
        }
    }

    /// Whether every field is blank, i.e. an update would change nothing
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.artist.is_empty()
            && self.genre.is_empty()
            && self.format.is_empty()
            && self.track_count == 0
            && self.year == 0
    }

    pub(crate) fn into_album(self, id: u32) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            genre: self.genre,
            format: self.format,
            track_count: self.track_count,
            year: self.year,
        }
    }
}

impl Album {
    /// Overwrite every non-blank field of `draft` onto this album
    pub fn apply(&mut self, draft: AlbumDraft) {
        if !draft.title.is_empty() {
            self.title = draft.title;
        }
        if !draft.artist.is_empty() {
            self.artist = draft.artist;
        }
        if !draft.genre.is_empty() {
            self.genre = draft.genre;
        }
        if !draft.format.is_empty() {
            self.format = draft.format;
        }
        if draft.track_count > 0 {
            self.track_count = draft.track_count;
        }
        if draft.year > 0 {
            self.year = draft.year;
        }
    }
}
