//! Album Tracker - a personal music album collection kept in CSV files
//!
//! Collections are edited in memory through an interactive menu and
//! written back to `<name>.csv` on request.

pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod persistence;

pub use config::TrackerConfig;
pub use error::CollectionError;
pub use menu::Menu;
pub use model::{Album, AlbumDraft, Collection};
