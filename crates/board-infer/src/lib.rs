//! Column type inference for board conversion.
//!
//! Given the sampled values of one source column, [`classify`] decides its
//! semantic property type through an ordered cascade of predicate tests.
//! [`build_schema`] runs the classifier over every non-title column of a
//! table and mints [`board_model::PropertyTemplate`] entries, registering
//! discrete option values through an [`OptionRegistry`].

pub mod classify;
pub mod dates;
pub mod fixup;
pub mod options;
pub mod schema;

pub use classify::{Classification, MULTI_VALUE_DELIMITER, classify};
pub use dates::parse_date_millis;
pub use fixup::fix_value;
pub use options::{OPTION_COLORS, OptionRegistry};
pub use schema::build_schema;
