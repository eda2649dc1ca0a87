//! Converts a source table into a board block graph.
//!
//! [`assemble`] is the entry point: it builds the schema once via
//! `board-infer`, then converts each row into a card block, attaching
//! optional text content supplied by a [`ContentSource`].

pub mod assemble;
pub mod content;
pub mod row;

pub use assemble::{GALLERY_VIEW_TITLE, assemble};
pub use content::{ContentSource, NoContent};
pub use row::convert_row;
