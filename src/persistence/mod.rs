//! Collection files on disk
//!
//! One album per line, no header row, columns
//! `id,title,artist,genre,format,track_count,year`. Text containing a comma,
//! quote or line break is quoted so it survives a save/load round trip.

mod reader;
mod writer;

pub use reader::{load, load_collection};
pub use writer::save;

use crate::error::CollectionError;
use std::path::{Path, PathBuf};

/// File extension of collection files
pub const EXTENSION: &str = "csv";

/// Path of the collection called `name` inside `dir`
///
/// The name must be non-blank and must not contain a path separator.
pub fn collection_path(dir: &Path, name: &str) -> Result<PathBuf, CollectionError> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CollectionError::InvalidName(name.to_string()));
    }

    Ok(dir.join(format!("{}.{}", name, EXTENSION)))
}
