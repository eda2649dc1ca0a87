//! Converts one raw row into typed card properties.

use std::collections::BTreeMap;

use tracing::debug;

use board_infer::{MULTI_VALUE_DELIMITER, fix_value, parse_date_millis};
use board_model::{DateValue, PropertyTemplate, PropertyType, PropertyValue};

/// Builds the typed property map for one row, keyed by template id.
///
/// `columns` is the full table header including the title column at index
/// 0, which is skipped here. Empty cells (after URL fixup) write nothing.
/// Malformed cells never fail: an unmatched checkbox literal or select
/// value drops the property, an unparseable date stores the raw string.
pub fn convert_row(
    schema: &[PropertyTemplate],
    columns: &[String],
    row: &[String],
) -> BTreeMap<String, PropertyValue> {
    let mut properties = BTreeMap::new();
    for (column, cell) in columns.iter().zip(row.iter()).skip(1) {
        let value = fix_value(cell);
        if value.is_empty() {
            continue;
        }
        let Some(template) = schema.iter().find(|template| template.name == *column) else {
            debug!(column = %column, "cell references unknown column, dropping");
            continue;
        };
        if let Some(converted) = convert_cell(template, &value) {
            properties.insert(template.id.clone(), converted);
        }
    }
    properties
}

fn convert_cell(template: &PropertyTemplate, value: &str) -> Option<PropertyValue> {
    match template.property_type {
        PropertyType::Checkbox => match value {
            "Yes" => Some(PropertyValue::Text("true".to_string())),
            "No" => Some(PropertyValue::Text("false".to_string())),
            other => {
                debug!(column = %template.name, value = %other, "not a checkbox literal, dropping");
                None
            }
        },
        PropertyType::Select => template
            .option_id(value)
            .map(|id| PropertyValue::Text(id.to_string())),
        PropertyType::MultiSelect => {
            // Unmatched tokens keep an empty-string placeholder so option
            // ids stay positionally aligned with the split tokens.
            let ids = value
                .split(MULTI_VALUE_DELIMITER)
                .map(|token| template.option_id(token).unwrap_or_default().to_string())
                .collect();
            Some(PropertyValue::OptionIds(ids))
        }
        PropertyType::Date => Some(match parse_date_millis(value) {
            Some(from) => PropertyValue::Date(DateValue { from }),
            None => PropertyValue::Text(value.to_string()),
        }),
        PropertyType::Url
        | PropertyType::Email
        | PropertyType::Phone
        | PropertyType::Number
        | PropertyType::Text => Some(PropertyValue::Text(value.to_string())),
    }
}
