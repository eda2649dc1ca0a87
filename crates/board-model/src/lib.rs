//! Data model for board archives.
//!
//! A converted table becomes a flat list of [`Block`] values forming a
//! rooted graph: one `board` block owning the inferred schema, one `view`
//! block, one `card` block per source row, and optional `text` blocks
//! holding per-card content.

pub mod block;
pub mod error;
pub mod ids;
pub mod property;
pub mod source;

pub use block::{Block, BlockFields, BlockKind, BoardFields, CardFields, TextFields, ViewFields};
pub use error::ModelError;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use property::{DateValue, PropertyOption, PropertyTemplate, PropertyType, PropertyValue};
pub use source::SourceTable;
