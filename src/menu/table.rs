//! Fixed-width album listing

use crate::model::Album;

fn header() -> String {
    format!(
        "{:<5} {:<20} {:<20} {:<10} {:<10} {:<12} {:<5}",
        "ID", "Title", "Artist", "Genre", "Format", "Track Count", "Year"
    )
}

fn row(album: &Album) -> String {
    format!(
        "{:<5} {:<20} {:<20} {:<10} {:<10} {:<12} {:<5}",
        album.id,
        album.title,
        album.artist,
        album.genre,
        album.format,
        album.track_count,
        album.year
    )
}

/// Header line followed by one line per album
pub fn format_table<'a>(albums: impl IntoIterator<Item = &'a Album>) -> String {
    let mut lines = vec![header()];
    lines.extend(albums.into_iter().map(row));
    lines.join("\n")
}
