//! Entity modules - records with a stable identifier

mod attribute_type;
mod event_node;
mod item;
mod map_node;
mod monmus;
mod npc;
mod quest;
mod skill;

pub use attribute_type::{AttributeType, NEUTRAL_MULTIPLIER};
pub use event_node::EventNode;
pub use item::Item;
pub use map_node::{ItemDrop, MapNode, WildEncounter};
pub use monmus::{EvolutionCondition, LearnableSkill, Monmus, UNSET_SKILL_ID};
pub use npc::{Npc, PartyMember};
pub use quest::Quest;
pub use skill::Skill;
