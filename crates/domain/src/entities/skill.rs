//! Skill entity - Battle techniques a monmus can learn

use serde::{Deserialize, Serialize};

use crate::ids::{AttributeTypeId, SkillId};
use crate::value_objects::{Effect, MultilingualText};

/// A skill. Every skill belongs to exactly one attribute type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: MultilingualText,
    pub description: MultilingualText,
    pub attribute_type_id: AttributeTypeId,
    #[serde(default)]
    pub power: i32,
    /// Hit chance in percent
    #[serde(default = "default_accuracy")]
    pub accuracy: i32,
    /// Uses per battle
    #[serde(default = "default_pp")]
    pub pp: i32,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

fn default_accuracy() -> i32 {
    100
}

fn default_pp() -> i32 {
    10
}

impl Skill {
    pub fn new(id: SkillId, name: MultilingualText, attribute_type_id: AttributeTypeId) -> Self {
        Self {
            id,
            name,
            description: MultilingualText::default(),
            attribute_type_id,
            power: 0,
            accuracy: default_accuracy(),
            pp: default_pp(),
            effects: Vec::new(),
        }
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
