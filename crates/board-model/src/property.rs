//! Card property schema and value types.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

/// Semantic type inferred for one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Url,
    Email,
    Phone,
    Number,
    Date,
    Checkbox,
    Select,
    MultiSelect,
    Text,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::MultiSelect => "multiSelect",
            Self::Text => "text",
        }
    }

    /// Whether this type carries a closed option list.
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "url" => Ok(Self::Url),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "checkbox" => Ok(Self::Checkbox),
            "select" => Ok(Self::Select),
            "multiSelect" => Ok(Self::MultiSelect),
            "text" => Ok(Self::Text),
            other => Err(ModelError::UnknownPropertyType(other.to_string())),
        }
    }
}

/// One allowed value of a select/multiSelect property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub id: String,
    /// The raw string exactly as it appeared in source data.
    pub value: String,
    /// Palette color name, e.g. `propColorGray`.
    pub color: String,
}

/// Schema entry for one card property: name, inferred type, and options.
///
/// `options` is empty unless `property_type` is discrete. Created once per
/// column by the schema builder and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub options: Vec<PropertyOption>,
}

impl PropertyTemplate {
    pub fn option_id(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.id.as_str())
    }
}

/// A typed attribute value stored on a card, keyed by template id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Option ids of a multiSelect property, aligned with the source tokens.
    OptionIds(Vec<String>),
    /// A parsed date, stored in the archive as an embedded JSON string.
    Date(DateValue),
    /// Everything else: raw text, a single option id, or `"true"`/`"false"`.
    Text(String),
}

/// A parsed date property value carrying epoch milliseconds.
///
/// The archive format stores these as the JSON *string* `{"from":<millis>}`,
/// so serialization renders the inner object and wraps it in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    pub from: i64,
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{{\"from\":{}}}", self.from))
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Inner {
            from: i64,
        }
        let raw = String::deserialize(deserializer)?;
        let inner: Inner = serde_json::from_str(&raw).map_err(D::Error::custom)?;
        Ok(Self { from: inner.from })
    }
}
