//! Quest entity - Main and side quests with prerequisite chains

use serde::{Deserialize, Serialize};

use crate::ids::QuestId;
use crate::value_objects::{MultilingualText, OpenMap, QuestKind};

/// A quest. `required_quest_ids` forms a dependency graph between quests;
/// nothing here prevents that graph from containing cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: MultilingualText,
    pub description: MultilingualText,
    #[serde(rename = "type", default)]
    pub kind: QuestKind,
    #[serde(default)]
    pub objectives: Vec<OpenMap>,
    /// Experience, items, money... free-form
    #[serde(default)]
    pub rewards: OpenMap,
    #[serde(default)]
    pub required_quest_ids: Vec<QuestId>,
}

impl Quest {
    pub fn new(id: QuestId, title: MultilingualText) -> Self {
        Self {
            id,
            title,
            description: MultilingualText::default(),
            kind: QuestKind::default(),
            objectives: Vec::new(),
            rewards: OpenMap::new(),
            required_quest_ids: Vec::new(),
        }
    }

    pub fn requires(mut self, quest: QuestId) -> Self {
        self.required_quest_ids.push(quest);
        self
    }
}
