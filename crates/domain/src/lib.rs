//! MonMaker domain: the game content schema and its reference rules.
//!
//! Everything here is pure data and pure functions. Parsing files, minting
//! ids and talking to generation providers happen in the engine crate.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use aggregates::{GameData, DEFAULT_GAME_VERSION};
pub use entities::{
    AttributeType, EventNode, EvolutionCondition, Item, ItemDrop, LearnableSkill, MapNode, Monmus,
    Npc, PartyMember, Quest, Skill, WildEncounter, NEUTRAL_MULTIPLIER, UNSET_SKILL_ID,
};
pub use error::DomainError;
pub use ids::{
    AttributeTypeId, EntityKind, EventNodeId, ItemId, MapNodeId, MonmusId, NpcId, QuestId, SkillId,
};
pub use validation::{validate, validate_with, ValidationReport, ValidationRules};
pub use value_objects::{
    Effect, EffectKind, EffectTarget, EffectTrigger, EventKind, EvolutionTrigger, GenerationModel,
    ItemCategory, Language, MapNodeKind, MetaValue, MonmusStats, MultilingualText, NpcKind, OpenMap,
    Position, QuestKind, UsageContext,
};
