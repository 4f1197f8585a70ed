//! Interactive text menu
//!
//! Reads commands line by line and dispatches them to the collection store
//! and the persistence layer.

mod controller;
mod prompt;
mod table;

pub use controller::Menu;
pub use prompt::{InputClosed, Prompter};
pub use table::format_table;
