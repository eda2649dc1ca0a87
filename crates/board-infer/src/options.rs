//! Option identity and display color assignment for discrete columns.

use board_model::{IdGenerator, PropertyOption};

/// Display palette for minted options. There is deliberately no
/// `propColorDefault` entry; every minted option gets a real color.
pub const OPTION_COLORS: [&str; 9] = [
    "propColorGray",
    "propColorBrown",
    "propColorOrange",
    "propColorYellow",
    "propColorGreen",
    "propColorBlue",
    "propColorPurple",
    "propColorPink",
    "propColorRed",
];

/// Assigns stable ids and round-robin colors to discrete option values.
///
/// One cursor rotates over [`OPTION_COLORS`] for the lifetime of the
/// registry and is shared across every column registered through it, so a
/// column's colors depend on global mint order within the run. Construct a
/// fresh registry per conversion run for reproducible colors.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    cursor: usize,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints one option per value, advancing the color cursor each time.
    ///
    /// `values` must already be deduplicated; the classifier supplies
    /// distinct values in first-appearance order.
    pub fn register(
        &mut self,
        ids: &mut dyn IdGenerator,
        values: &[String],
    ) -> Vec<PropertyOption> {
        values
            .iter()
            .map(|value| PropertyOption {
                id: ids.mint(),
                value: value.clone(),
                color: self.next_color().to_string(),
            })
            .collect()
    }

    fn next_color(&mut self) -> &'static str {
        let color = OPTION_COLORS[self.cursor];
        self.cursor = (self.cursor + 1) % OPTION_COLORS.len();
        color
    }
}
