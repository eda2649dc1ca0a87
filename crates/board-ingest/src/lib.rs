//! Filesystem side of the conversion: locating a Notion CSV export,
//! reading its table, and looking up per-card markdown content.

pub mod discovery;
pub mod error;
pub mod markdown;
pub mod table;

pub use discovery::{ExportLayout, export_title, find_export};
pub use error::{IngestError, Result};
pub use markdown::MarkdownFolder;
pub use table::read_table;
