//! Monmus entity - The collectible creatures of the game
//!
//! A monmus references 1-2 attribute types, a set of learnable skills and the
//! monmus it evolves into. None of these references are checked on
//! construction; the reference validator reports dangling ones.

use serde::{Deserialize, Serialize};

use crate::ids::{AttributeTypeId, MonmusId, SkillId};
use crate::value_objects::{EvolutionTrigger, MetaValue, MonmusStats, MultilingualText, OpenMap};

/// A creature definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monmus {
    pub id: MonmusId,
    pub name: MultilingualText,
    pub description: MultilingualText,
    pub pokedex_number: i32,
    /// One or two attribute types by convention
    pub attribute_types: Vec<AttributeTypeId>,
    pub base_stats: MonmusStats,
    /// Metres
    #[serde(default = "default_height")]
    pub height: f64,
    /// Kilograms
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_exp_yield")]
    pub exp_yield: i32,
    /// Base contract (catch) rate
    #[serde(default = "default_catch_rate")]
    pub catch_rate: i32,
    #[serde(default)]
    pub learnable_skills: Vec<LearnableSkill>,
    #[serde(default)]
    pub evolution_conditions: Vec<EvolutionCondition>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_height() -> f64 {
    1.0
}

fn default_weight() -> f64 {
    10.0
}

fn default_exp_yield() -> i32 {
    100
}

fn default_catch_rate() -> i32 {
    45
}

impl Monmus {
    pub fn new(
        id: MonmusId,
        name: MultilingualText,
        pokedex_number: i32,
        attribute_types: Vec<AttributeTypeId>,
    ) -> Self {
        Self {
            id,
            name,
            description: MultilingualText::default(),
            pokedex_number,
            attribute_types,
            base_stats: MonmusStats::default(),
            height: default_height(),
            weight: default_weight(),
            exp_yield: default_exp_yield(),
            catch_rate: default_catch_rate(),
            learnable_skills: Vec::new(),
            evolution_conditions: Vec::new(),
            abilities: Vec::new(),
            image_url: None,
        }
    }

    pub fn with_skill(mut self, level: u32, skill_id: SkillId) -> Self {
        self.learnable_skills.push(LearnableSkill::new(level, skill_id));
        self
    }

    pub fn with_evolution(mut self, condition: EvolutionCondition) -> Self {
        self.evolution_conditions.push(condition);
        self
    }

    /// Skill ids declared by the learnset, in entry order.
    ///
    /// A `skill_id` of 0 is the editor's "not chosen yet" placeholder and
    /// counts as undeclared.
    pub fn declared_skill_ids(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.learnable_skills
            .iter()
            .filter_map(|entry| entry.skill_id)
            .filter(|id| *id != UNSET_SKILL_ID)
    }
}

/// Placeholder skill id for a learnset row whose skill is not picked yet.
pub const UNSET_SKILL_ID: SkillId = SkillId::new(0);

/// A `(level, skill)` learnset entry.
///
/// Both keys are optional because the editor saves half-filled rows; any other
/// keys an author adds are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnableSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<SkillId>,
    #[serde(flatten)]
    pub extra: OpenMap,
}

impl LearnableSkill {
    pub fn new(level: u32, skill_id: SkillId) -> Self {
        Self {
            level: Some(level),
            skill_id: Some(skill_id),
            extra: OpenMap::new(),
        }
    }
}

/// How and into what a monmus evolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionCondition {
    #[serde(rename = "type")]
    pub trigger: EvolutionTrigger,
    /// Level number, item id, friendship threshold... depending on `trigger`
    pub value: MetaValue,
    pub target_monmus_id: MonmusId,
}

impl EvolutionCondition {
    pub fn at_level(level: i64, target: MonmusId) -> Self {
        Self {
            trigger: EvolutionTrigger::Level,
            value: MetaValue::Integer(level),
            target_monmus_id: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "name": {"ko": "파이리"},
            "description": {},
            "pokedex_number": 4,
            "attribute_types": [1],
            "base_stats": {}
        })
    }

    #[test]
    fn minimal_document_gets_defaults() {
        let monmus: Monmus = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(monmus.height, 1.0);
        assert_eq!(monmus.weight, 10.0);
        assert_eq!(monmus.exp_yield, 100);
        assert_eq!(monmus.catch_rate, 45);
        assert_eq!(monmus.image_url, None);
        assert_eq!(monmus.base_stats, MonmusStats::default());
    }

    #[test]
    fn base_stats_are_required() {
        let mut json = minimal_json();
        json.as_object_mut().unwrap().remove("base_stats");
        assert!(serde_json::from_value::<Monmus>(json).is_err());
    }

    #[test]
    fn learnset_keeps_extra_keys_and_tolerates_partial_rows() {
        let mut json = minimal_json();
        json["learnable_skills"] = serde_json::json!([
            {"level": 5, "skill_id": 3, "note": "tutor only"},
            {"level": 9}
        ]);
        let monmus: Monmus = serde_json::from_value(json).unwrap();

        assert_eq!(monmus.learnable_skills[0].skill_id, Some(SkillId::new(3)));
        assert_eq!(
            monmus.learnable_skills[0].extra["note"],
            MetaValue::Text("tutor only".into())
        );
        assert_eq!(monmus.learnable_skills[1].skill_id, None);
        assert_eq!(monmus.declared_skill_ids().collect::<Vec<_>>(), vec![SkillId::new(3)]);

        let back = serde_json::to_value(&monmus).unwrap();
        assert_eq!(back["learnable_skills"][0]["note"], "tutor only");
        assert!(back["learnable_skills"][1].get("skill_id").is_none());
    }

    #[test]
    fn zero_skill_id_is_not_a_declared_skill() {
        let mut json = minimal_json();
        json["learnable_skills"] = serde_json::json!([
            {"level": 1, "skill_id": 0},
            {"level": 5, "skill_id": 7}
        ]);
        let monmus: Monmus = serde_json::from_value(json).unwrap();

        assert_eq!(monmus.learnable_skills[0].skill_id, Some(UNSET_SKILL_ID));
        assert_eq!(monmus.declared_skill_ids().collect::<Vec<_>>(), vec![SkillId::new(7)]);
    }

    #[test]
    fn evolution_value_accepts_any_shape() {
        let condition: EvolutionCondition = serde_json::from_str(
            r#"{"type": "item", "value": "fire_stone", "target_monmus_id": 5}"#,
        )
        .unwrap();
        assert_eq!(condition.trigger, EvolutionTrigger::Item);
        assert_eq!(condition.value.as_str(), Some("fire_stone"));
    }
}
