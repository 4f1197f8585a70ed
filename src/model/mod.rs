//! Album records and the in-memory collection store
//!
//! Nothing here knows how collections are stored on disk.

mod album;
mod collection;

pub use album::{Album, AlbumDraft};
pub use collection::Collection;
