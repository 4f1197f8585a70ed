//! Runtime configuration

use crate::error::CollectionError;
use crate::persistence::collection_path;
use std::path::PathBuf;

/// Configuration for a tracker session
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory holding `<name>.csv` collection files
    pub collection_dir: PathBuf,
}

impl TrackerConfig {
    /// Create a configuration rooted at `collection_dir`
    pub fn new(collection_dir: PathBuf) -> Self {
        Self { collection_dir }
    }

    /// File backing the collection called `name`
    pub fn collection_path(&self, name: &str) -> Result<PathBuf, CollectionError> {
        collection_path(&self.collection_dir, name)
    }
}

impl Default for TrackerConfig {
    /// Collections live in the working directory
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}
