//! Loosely-typed header fields.
//!
//! Freight header attributes (ports, origin country, ETA/ETD) are host
//! schema customizations that drift between deployments, so documents carry
//! them as a keyed map rather than as fixed struct fields. The conversion
//! mapper copies them by name and silently skips keys the source does not
//! have.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single header field value.
///
/// Variant order matters for untagged deserialization: numbers first, then
/// ISO dates, then any other string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Header fields keyed by attribute name. Ordered for stable serialization.
pub type HeaderFields = BTreeMap<String, FieldValue>;

/// Copy fields from `source` to `target` following an ordered list of
/// `(source_key, target_key)` pairs.
///
/// A pair whose source key is absent is skipped without touching the target
/// — host schemas drift, and a missing attribute is not an error.
pub fn copy_mapped_fields(
    pairs: &[(&str, &str)],
    source: &HeaderFields,
    target: &mut HeaderFields,
) {
    for (src_key, tgt_key) in pairs {
        if let Some(value) = source.get(*src_key) {
            target.insert((*tgt_key).to_string(), value.clone());
        }
    }
}
