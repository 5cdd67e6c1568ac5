//! EventNode entity - A step in the story graph

use serde::{Deserialize, Serialize};

use crate::ids::EventNodeId;
use crate::value_objects::{EventKind, MultilingualText, OpenMap};

/// A dialogue line, battle or choice. `next_nodes` links events into a
/// directed graph; branching choices simply list several successors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventNode {
    pub id: EventNodeId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub content: MultilingualText,
    #[serde(default)]
    pub next_nodes: Vec<EventNodeId>,
    /// Trigger conditions, free-form
    #[serde(default)]
    pub conditions: OpenMap,
    #[serde(default)]
    pub metadata: OpenMap,
}

impl EventNode {
    pub fn new(id: impl Into<EventNodeId>, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: MultilingualText::default(),
            next_nodes: Vec::new(),
            conditions: OpenMap::new(),
            metadata: OpenMap::new(),
        }
    }
}
