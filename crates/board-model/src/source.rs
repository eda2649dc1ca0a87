//! In-memory form of one source table.

/// A flat table handed to the conversion engine by an ingest collaborator.
///
/// Column order is stable across all rows; the first column is the title
/// column and becomes each card's display name rather than a property.
/// Rows are positional and aligned with `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    /// Display title of the export, used as the board title.
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(title: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Names of all non-title columns, in table order.
    pub fn property_columns(&self) -> &[String] {
        if self.columns.is_empty() {
            &[]
        } else {
            &self.columns[1..]
        }
    }
}
