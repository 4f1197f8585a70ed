//! Collection file reader

use crate::error::CollectionError;
use crate::model::{Album, Collection};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read every album in `path`, in file order
///
/// A record with the wrong number of columns or a non-numeric ID, track
/// count or year fails the whole load.
pub fn load(path: &Path) -> Result<Vec<Album>, CollectionError> {
    let file = File::open(path).map_err(|source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(BufReader::new(file));

    let mut albums = Vec::new();
    for record in reader.deserialize::<Album>() {
        let album = record.map_err(|source| CollectionError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        albums.push(album);
    }

    log::info!("Read {} albums from {:?}", albums.len(), path);
    Ok(albums)
}

/// Read `path` into a ready-to-use collection
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    Collection::from_albums(load(path)?)
}
