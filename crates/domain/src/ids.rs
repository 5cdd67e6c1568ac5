use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Integer-keyed entity ids.
///
/// Content authors pick these by hand or mint them through the engine's id
/// counter, so they stay plain integers on the wire.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// String-keyed node ids (map and story graph nodes).
macro_rules! define_key {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

// Battle vocabulary
define_id!(AttributeTypeId);
define_id!(SkillId);
define_id!(ItemId);
define_id!(MonmusId);

// People and progression
define_id!(NpcId);
define_id!(QuestId);

// Graph nodes
define_key!(MapNodeId);
define_key!(EventNodeId);

/// Namespaces the engine's id counter hands out ids for.
///
/// Map and event nodes are keyed by author-chosen strings and have no
/// namespace here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Attributes,
    Skills,
    Items,
    Monmus,
    Npcs,
    Quests,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        Self::Attributes,
        Self::Skills,
        Self::Items,
        Self::Monmus,
        Self::Npcs,
        Self::Quests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Skills => "skills",
            Self::Items => "items",
            Self::Monmus => "monmus",
            Self::Npcs => "npcs",
            Self::Quests => "quests",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown entity type: {s}")))
    }
}
