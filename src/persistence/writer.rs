//! Collection file writer

use crate::error::CollectionError;
use crate::model::Album;
use std::fs::File;
use std::path::Path;

/// Write `albums` to `path`, replacing any existing file
pub fn save(path: &Path, albums: &[Album]) -> Result<(), CollectionError> {
    let io_error = |source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for album in albums {
        writer
            .serialize(album)
            .map_err(|source| CollectionError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }

    writer.flush().map_err(io_error)?;

    log::info!("Wrote {} albums to {:?}", albums.len(), path);
    Ok(())
}
