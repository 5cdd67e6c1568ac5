//! GameData aggregate - one game's complete authored content
//!
//! The aggregate exclusively owns every collection and every entity in it.
//! Collections are plain sequences: the container does not enforce id
//! uniqueness, and cross-references between collections may dangle while an
//! author is still working. `crate::validation` reports on both.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{AttributeType, EventNode, Item, MapNode, Monmus, Npc, Quest, Skill};
use crate::ids::{AttributeTypeId, ItemId, MonmusId, NpcId, QuestId, SkillId};
use crate::value_objects::{MultilingualText, OpenMap};

pub const DEFAULT_GAME_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default = "default_version")]
    pub version: String,
    pub game_title: MultilingualText,
    pub game_description: MultilingualText,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub attributes: Vec<AttributeType>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub monmus_list: Vec<Monmus>,
    #[serde(default)]
    pub map_nodes: Vec<MapNode>,
    #[serde(default)]
    pub events: Vec<EventNode>,
    #[serde(default)]
    pub npcs: Vec<Npc>,
    #[serde(default)]
    pub quests: Vec<Quest>,
    /// Game-wide settings, free-form
    #[serde(default)]
    pub settings: OpenMap,
}

fn default_version() -> String {
    DEFAULT_GAME_VERSION.to_string()
}

impl GameData {
    pub fn new(title: MultilingualText, description: MultilingualText) -> Self {
        Self {
            version: default_version(),
            game_title: title,
            game_description: description,
            author: String::new(),
            attributes: Vec::new(),
            skills: Vec::new(),
            items: Vec::new(),
            monmus_list: Vec::new(),
            map_nodes: Vec::new(),
            events: Vec::new(),
            npcs: Vec::new(),
            quests: Vec::new(),
            settings: OpenMap::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    // =========================================================================
    // Id sets (built from the ids actually present, duplicates collapse)
    // =========================================================================

    pub fn attribute_ids(&self) -> HashSet<AttributeTypeId> {
        self.attributes.iter().map(|a| a.id).collect()
    }

    pub fn skill_ids(&self) -> HashSet<SkillId> {
        self.skills.iter().map(|s| s.id).collect()
    }

    // =========================================================================
    // Maximum ids (None for an empty collection)
    // =========================================================================

    pub fn max_attribute_id(&self) -> Option<AttributeTypeId> {
        self.attributes.iter().map(|a| a.id).max()
    }

    pub fn max_skill_id(&self) -> Option<SkillId> {
        self.skills.iter().map(|s| s.id).max()
    }

    pub fn max_item_id(&self) -> Option<ItemId> {
        self.items.iter().map(|i| i.id).max()
    }

    pub fn max_monmus_id(&self) -> Option<MonmusId> {
        self.monmus_list.iter().map(|m| m.id).max()
    }

    pub fn max_npc_id(&self) -> Option<NpcId> {
        self.npcs.iter().map(|n| n.id).max()
    }

    pub fn max_quest_id(&self) -> Option<QuestId> {
        self.quests.iter().map(|q| q.id).max()
    }

    /// Total number of entities across all collections.
    pub fn entity_count(&self) -> usize {
        self.attributes.len()
            + self.skills.len()
            + self.items.len()
            + self.monmus_list.len()
            + self.map_nodes.len()
            + self.events.len()
            + self.npcs.len()
            + self.quests.len()
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self::new(MultilingualText::default(), MultilingualText::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_title_and_description_are_required() {
        let data: GameData =
            serde_json::from_str(r#"{"game_title": {"ko": "몬무"}, "game_description": {}}"#)
                .unwrap();
        assert_eq!(data.version, DEFAULT_GAME_VERSION);
        assert_eq!(data.author, "");
        assert_eq!(data.entity_count(), 0);
        assert!(data.settings.is_empty());
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(serde_json::from_str::<GameData>(r#"{"game_description": {}}"#).is_err());
    }

    #[test]
    fn unknown_top_level_fields_are_ignored() {
        let data: GameData = serde_json::from_str(
            r#"{"game_title": {}, "game_description": {}, "editor_state": {"zoom": 2}}"#,
        )
        .unwrap();
        assert_eq!(data, GameData::default());
    }

    #[test]
    fn max_ids_ignore_order() {
        let mut data = GameData::default();
        for id in [3, 7, 2] {
            data.monmus_list.push(Monmus::new(
                MonmusId::new(id),
                MultilingualText::new("m"),
                id as i32,
                vec![],
            ));
        }
        assert_eq!(data.max_monmus_id(), Some(MonmusId::new(7)));
        assert_eq!(data.max_skill_id(), None);
    }
}
