//! Semantic type classification for one column's sampled values.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use board_model::PropertyType;

use crate::dates::parse_date_millis;

/// Delimiter used by multi-value cells ("x, y, z").
pub const MULTI_VALUE_DELIMITER: &str = ", ";

/// Fraction of sampled values that must match a predicate tier.
const MATCH_RATIO: f64 = 0.8;

/// Distinct-token ratio below which a column reads as a closed vocabulary.
///
/// Tuned constant inherited from the original importer, not principled.
const REPEATED_TOKEN_RATIO: f64 = 0.9;

/// Tokens-per-row ratio above which cells pack multiple tags each.
///
/// Tuned constant inherited from the original importer, not principled.
const TOKENS_PER_ROW_RATIO: f64 = 1.1;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+$").expect("valid url pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+?@\w+?\.\w+$").expect("valid email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0?9\d{9}|(0|\+98)\d{10})$").expect("valid phone pattern"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid number pattern"));

/// The inferred type of a column, carrying the discrete values for
/// select/multiSelect so the schema builder can mint options without
/// re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Url,
    Email,
    Phone,
    Number,
    Date,
    Checkbox,
    /// Distinct whole cell values, in first-appearance order.
    Select(Vec<String>),
    /// Distinct split tokens, in first-appearance order.
    MultiSelect(Vec<String>),
    Text,
}

impl Classification {
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Url => PropertyType::Url,
            Self::Email => PropertyType::Email,
            Self::Phone => PropertyType::Phone,
            Self::Number => PropertyType::Number,
            Self::Date => PropertyType::Date,
            Self::Checkbox => PropertyType::Checkbox,
            Self::Select(_) => PropertyType::Select,
            Self::MultiSelect(_) => PropertyType::MultiSelect,
            Self::Text => PropertyType::Text,
        }
    }

    /// Option values for discrete types, empty otherwise.
    pub fn option_values(&self) -> &[String] {
        match self {
            Self::Select(values) | Self::MultiSelect(values) => values,
            _ => &[],
        }
    }
}

/// Classifies a column from its non-empty sampled values.
///
/// Tiers are evaluated in a fixed order and the first tier whose match
/// ratio clears [`MATCH_RATIO`] wins: url, email, phone, number, date,
/// then checkbox (exact {"Yes","No"} value set), then select/multiSelect
/// (repeated-vocabulary heuristics), then text. An empty sample is always
/// text; no tier divides by the sample size in that case.
pub fn classify(values: &[String]) -> Classification {
    if values.is_empty() {
        return Classification::Text;
    }

    if match_ratio(values, |v| URL_RE.is_match(v)) > MATCH_RATIO {
        return Classification::Url;
    }
    if match_ratio(values, |v| EMAIL_RE.is_match(v)) > MATCH_RATIO {
        return Classification::Email;
    }
    if match_ratio(values, |v| PHONE_RE.is_match(v)) > MATCH_RATIO {
        return Classification::Phone;
    }
    if match_ratio(values, |v| NUMBER_RE.is_match(v)) > MATCH_RATIO {
        return Classification::Number;
    }
    if match_ratio(values, |v| parse_date_millis(v).is_some()) > MATCH_RATIO {
        return Classification::Date;
    }

    let distinct: BTreeSet<&str> = values.iter().map(String::as_str).collect();
    if distinct.len() == 2 && distinct.contains("Yes") && distinct.contains("No") {
        return Classification::Checkbox;
    }

    let tokens: Vec<&str> = values
        .iter()
        .flat_map(|value| value.split(MULTI_VALUE_DELIMITER))
        .collect();
    let distinct_tokens = dedup_in_order(&tokens);
    if !tokens.is_empty()
        && (distinct_tokens.len() as f64 / tokens.len() as f64) < REPEATED_TOKEN_RATIO
    {
        if tokens.len() as f64 / values.len() as f64 > TOKENS_PER_ROW_RATIO {
            return Classification::MultiSelect(distinct_tokens);
        }
        let whole_values: Vec<&str> = values.iter().map(String::as_str).collect();
        return Classification::Select(dedup_in_order(&whole_values));
    }

    Classification::Text
}

fn match_ratio(values: &[String], predicate: impl Fn(&str) -> bool) -> f64 {
    let matched = values.iter().filter(|value| predicate(value.as_str())).count();
    matched as f64 / values.len() as f64
}

/// Deduplicates by exact string equality, keeping first-appearance order.
fn dedup_in_order(values: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(*value) {
            out.push((*value).to_string());
        }
    }
    out
}
