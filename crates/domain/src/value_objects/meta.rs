//! Open, author-defined metadata.
//!
//! Effects, story events and quests carry kind-specific parameters whose shape
//! is decided by content authors, not by the schema. `MetaValue` is the closed
//! set of shapes those parameters may take.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String-keyed bag of open values. Ordered so exports are stable.
pub type OpenMap = BTreeMap<String, MetaValue>;

/// One open value. Untagged on the wire, so documents look like plain JSON/YAML.
///
/// Variant order matters for untagged deserialization: integers are tried
/// before floats so `3` stays `Integer(3)` while `3.5` becomes `Float(3.5)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<MetaValue>),
    Map(OpenMap),
    #[default]
    Null,
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<MetaValue>> for MetaValue {
    fn from(value: Vec<MetaValue>) -> Self {
        Self::List(value)
    }
}

impl From<OpenMap> for MetaValue {
    fn from(value: OpenMap) -> Self {
        Self::Map(value)
    }
}
