//! Builds the board schema from a source table.

use tracing::debug;

use board_model::{IdGenerator, PropertyTemplate, SourceTable};

use crate::classify::classify;
use crate::fixup::fix_value;
use crate::options::OptionRegistry;

/// Infers one [`PropertyTemplate`] per non-title column, in table order.
///
/// Each column is sampled from its non-empty cells (after URL fixup),
/// classified, and, when discrete, given options through `registry`.
/// The registry's color cursor is shared across all columns of the call.
pub fn build_schema(
    table: &SourceTable,
    registry: &mut OptionRegistry,
    ids: &mut dyn IdGenerator,
) -> Vec<PropertyTemplate> {
    let mut templates = Vec::new();
    for (offset, column) in table.property_columns().iter().enumerate() {
        let column_index = offset + 1;
        let sample = sample_column(table, column_index);
        let classification = classify(&sample);
        debug!(
            column = %column,
            property_type = %classification.property_type(),
            sampled = sample.len(),
            "classified column"
        );
        let id = ids.mint();
        let options = if classification.property_type().is_discrete() {
            registry.register(ids, classification.option_values())
        } else {
            Vec::new()
        };
        templates.push(PropertyTemplate {
            id,
            name: column.clone(),
            property_type: classification.property_type(),
            options,
        });
    }
    templates
}

/// Non-empty fixed-up cells of one column, in row order.
fn sample_column(table: &SourceTable, column_index: usize) -> Vec<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.get(column_index))
        .map(|cell| fix_value(cell))
        .filter(|value| !value.is_empty())
        .collect()
}
