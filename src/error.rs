//! Errors surfaced by the collection store and persistence layer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Album with ID {0} not found")]
    NotFound(u32),

    #[error("Duplicate album ID {0} in collection")]
    DuplicateId(u32),

    #[error("No album IDs left after {0}")]
    IdsExhausted(u32),

    #[error("Invalid collection name: {0:?}")]
    InvalidName(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed collection file {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

