//! MapNode entity - Locations on the world map
//!
//! Nodes form a directed graph through `connections`; an edge from A to B
//! says nothing about an edge from B to A.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, MapNodeId, MonmusId};
use crate::value_objects::{MapNodeKind, MetaValue, MultilingualText, OpenMap, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: MapNodeId,
    pub name: MultilingualText,
    #[serde(rename = "type")]
    pub kind: MapNodeKind,
    #[serde(default)]
    pub connections: Vec<MapNodeId>,
    #[serde(default)]
    pub position: Position,
    /// Chance of a wild encounter per step, in [0, 1]
    #[serde(default)]
    pub encounter_rate: f64,
    #[serde(default)]
    pub wild_monmus: Vec<WildEncounter>,
    #[serde(default)]
    pub items: Vec<ItemDrop>,
}

impl MapNode {
    pub fn new(id: impl Into<MapNodeId>, name: MultilingualText, kind: MapNodeKind) -> Self {
        Self {
            id: id.into(),
            name,
            kind,
            connections: Vec::new(),
            position: Position::default(),
            encounter_rate: 0.0,
            wild_monmus: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn connect_to(mut self, target: impl Into<MapNodeId>) -> Self {
        self.connections.push(target.into());
        self
    }

    pub fn is_connected_to(&self, target: &MapNodeId) -> bool {
        self.connections.contains(target)
    }
}

/// A wild monmus that may appear on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WildEncounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monmus_id: Option<MonmusId>,
    /// Usually `[min, max]`, but the shape is up to the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_range: Option<MetaValue>,
    #[serde(flatten)]
    pub extra: OpenMap,
}

/// An item that may be found on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(flatten)]
    pub extra: OpenMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encounters_and_drops() {
        let node: MapNode = serde_json::from_str(
            r#"{
                "id": "route-1",
                "name": {"ko": "1번 도로"},
                "type": "field",
                "connections": ["town-1"],
                "position": {"x": 10.5},
                "encounter_rate": 0.2,
                "wild_monmus": [{"monmus_id": 1, "level_range": [2, 5]}],
                "items": [{"item_id": 3, "probability": 0.1}]
            }"#,
        )
        .unwrap();

        assert_eq!(node.kind, MapNodeKind::Field);
        assert!(node.is_connected_to(&MapNodeId::new("town-1")));
        assert_eq!(node.position, Position { x: 10.5, y: 0.0 });
        assert_eq!(node.wild_monmus[0].monmus_id, Some(MonmusId::new(1)));
        assert_eq!(
            node.wild_monmus[0].level_range,
            Some(MetaValue::List(vec![MetaValue::Integer(2), MetaValue::Integer(5)]))
        );
        assert_eq!(node.items[0].probability, Some(0.1));
    }

    #[test]
    fn node_ids_must_be_strings() {
        let result = serde_json::from_str::<MapNode>(r#"{"id": 1, "name": {}, "type": "town"}"#);
        assert!(result.is_err());
    }
}
