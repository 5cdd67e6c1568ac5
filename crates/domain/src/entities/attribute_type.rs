//! AttributeType entity - elemental types and their matchup chart

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::ids::AttributeTypeId;
use crate::value_objects::MultilingualText;

/// Multiplier applied when no matchup entry exists.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// An attribute type (fire, water, ...).
///
/// `matchups` maps a defending attribute id to the damage multiplier this
/// attribute deals against it: 1.0 neutral, above 1.0 super-effective, below
/// 1.0 resisted. Keys may reference any attribute, including this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeType {
    pub id: AttributeTypeId,
    pub name: MultilingualText,
    #[serde(default, deserialize_with = "deserialize_matchups")]
    pub matchups: BTreeMap<AttributeTypeId, f64>,
}

/// Matchup keys arrive as integers (YAML) or integer strings (JSON object
/// keys, and YAML converted from JSON).
fn deserialize_matchups<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<AttributeTypeId, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(untagged)]
    enum RawKey {
        Id(i64),
        Text(String),
    }

    BTreeMap::<RawKey, f64>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, multiplier)| {
            let id = match key {
                RawKey::Id(id) => id,
                RawKey::Text(text) => text.trim().parse().map_err(|_| {
                    de::Error::custom(format!("matchup key '{text}' is not an attribute id"))
                })?,
            };
            Ok((AttributeTypeId::new(id), multiplier))
        })
        .collect()
}

impl AttributeType {
    pub fn new(id: AttributeTypeId, name: MultilingualText) -> Self {
        Self {
            id,
            name,
            matchups: BTreeMap::new(),
        }
    }

    pub fn with_matchup(mut self, against: AttributeTypeId, multiplier: f64) -> Self {
        self.matchups.insert(against, multiplier);
        self
    }

    pub fn multiplier_against(&self, defender: AttributeTypeId) -> f64 {
        self.matchups
            .get(&defender)
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }
}
