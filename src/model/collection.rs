use super::{Album, AlbumDraft};
use crate::error::CollectionError;
use std::collections::HashSet;

/// An ordered, in-memory album collection
///
/// Records keep insertion order. IDs come from a counter that only moves
/// forward, so an ID freed by a delete is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection {
    albums: Vec<Album>,

    /// ID the next added album receives
    next_id: u32,
}

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            albums: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a collection from previously stored records, keeping their order
    ///
    /// Fails if two records share an ID, or if the highest ID leaves no
    /// room for another album.
    pub fn from_albums(albums: Vec<Album>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(albums.len());
        for album in &albums {
            if !seen.insert(album.id) {
                return Err(CollectionError::DuplicateId(album.id));
            }
        }

        let next_id = match albums.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1).ok_or(CollectionError::IdsExhausted(max))?,
            None => 1,
        };

        Ok(Self { albums, next_id })
    }

    /// Append a new album and return it
    ///
    /// Fails once the ID counter has reached `u32::MAX`.
    pub fn add(&mut self, draft: AlbumDraft) -> Result<&Album, CollectionError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(CollectionError::IdsExhausted(id))?;

        log::debug!("Adding album {} ({:?})", id, draft.title);
        self.albums.push(draft.into_album(id));
        Ok(&self.albums[self.albums.len() - 1])
    }

    /// Overwrite the non-blank fields of `draft` onto the album with `id`
    pub fn update(&mut self, id: u32, draft: AlbumDraft) -> Result<&Album, CollectionError> {
        let index = self.find_by_id(id).ok_or(CollectionError::NotFound(id))?;

        log::debug!("Updating album {}", id);
        let album = &mut self.albums[index];
        album.apply(draft);
        Ok(album)
    }

    /// Remove the album with `id`, shifting later records left
    pub fn delete(&mut self, id: u32) -> Result<Album, CollectionError> {
        let index = self.find_by_id(id).ok_or(CollectionError::NotFound(id))?;

        log::debug!("Deleting album {}", id);
        Ok(self.albums.remove(index))
    }

    /// Index of the album with `id`
    pub fn find_by_id(&self, id: u32) -> Option<usize> {
        self.albums.iter().position(|a| a.id == id)
    }

    /// Index of the first album whose title is exactly `title` (case-sensitive)
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.albums.iter().position(|a| a.title == title)
    }

    /// Album at `index`
    pub fn get(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    /// All albums whose title contains `query`, ignoring case
    pub fn search_by_title(&self, query: &str) -> Vec<&Album> {
        let query = query.to_lowercase();
        self.albums
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&query))
            .collect()
    }

    /// All albums in current order
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}
