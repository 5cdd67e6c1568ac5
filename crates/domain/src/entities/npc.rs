//! Npc entity - Trainers, merchants and quest givers

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, MonmusId, NpcId, QuestId};
use crate::value_objects::{MultilingualText, NpcKind, OpenMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: MultilingualText,
    pub dialogue: MultilingualText,
    #[serde(rename = "type", default)]
    pub kind: NpcKind,
    /// Owned monmus, used when the NPC is a trainer
    #[serde(default)]
    pub party: Vec<PartyMember>,
    #[serde(default)]
    pub items_for_sale: Vec<ItemId>,
    #[serde(default)]
    pub quests: Vec<QuestId>,
}

impl Npc {
    pub fn new(id: NpcId, name: MultilingualText, dialogue: MultilingualText) -> Self {
        Self {
            id,
            name,
            dialogue,
            kind: NpcKind::default(),
            party: Vec::new(),
            items_for_sale: Vec::new(),
            quests: Vec::new(),
        }
    }
}

/// A monmus on a trainer's team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monmus_id: Option<MonmusId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(flatten)]
    pub extra: OpenMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_generic() {
        let npc: Npc =
            serde_json::from_str(r#"{"id": 1, "name": {"ko": "오박사"}, "dialogue": {}}"#).unwrap();
        assert_eq!(npc.kind, NpcKind::Generic);
        assert!(npc.party.is_empty());
    }

    #[test]
    fn trainer_party_parses() {
        let npc: Npc = serde_json::from_str(
            r#"{"id": 2, "name": {}, "dialogue": {}, "type": "trainer",
                "party": [{"monmus_id": 4, "level": 12, "nickname": "Blaze"}]}"#,
        )
        .unwrap();
        assert_eq!(npc.kind, NpcKind::Trainer);
        assert_eq!(npc.party[0].level, Some(12));
        assert!(npc.party[0].extra.contains_key("nickname"));
    }
}
