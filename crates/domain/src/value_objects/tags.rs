//! Open string enumerations.
//!
//! Authors may invent new kinds (a new effect type, a new NPC role) without a
//! schema change. Each tag has the variants the editor knows about plus an
//! `Other` fallback that carries the raw string, so unknown tags survive an
//! import/export cycle byte-for-byte.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! open_tag {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Author-defined tag outside the known set
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                match tag {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_tag! {
    /// What an effect does.
    EffectKind {
        Damage => "damage",
        Heal => "heal",
        Status => "status",
        StatChange => "stat_change",
    }
}

open_tag! {
    /// When an effect fires.
    EffectTrigger {
        Immediate => "immediate",
    }
}

impl Default for EffectTrigger {
    fn default() -> Self {
        Self::Immediate
    }
}

open_tag! {
    /// Who an effect applies to.
    EffectTarget {
        /// The user of the skill or item
        User => "self",
        Opponent => "opponent",
        All => "all",
    }
}

impl Default for EffectTarget {
    fn default() -> Self {
        Self::Opponent
    }
}

open_tag! {
    ItemCategory {
        Potion => "potion",
        /// Contract ball used to recruit a monmus
        Ball => "ball",
        Battle => "battle",
        Key => "key",
    }
}

open_tag! {
    /// Where an item may be used.
    UsageContext {
        Battle => "battle",
        Field => "field",
        Both => "both",
    }
}

open_tag! {
    EvolutionTrigger {
        Level => "level",
        Item => "item",
        Friendship => "friendship",
    }
}

open_tag! {
    MapNodeKind {
        Field => "field",
        Town => "town",
        Dungeon => "dungeon",
    }
}

open_tag! {
    EventKind {
        Dialogue => "dialogue",
        Battle => "battle",
        Choice => "choice",
    }
}

open_tag! {
    NpcKind {
        Generic => "generic",
        Trainer => "trainer",
        Merchant => "merchant",
        QuestGiver => "quest_giver",
    }
}

impl Default for NpcKind {
    fn default() -> Self {
        Self::Generic
    }
}

open_tag! {
    QuestKind {
        Main => "main",
        Side => "side",
    }
}

impl Default for QuestKind {
    fn default() -> Self {
        Self::Main
    }
}
