//! Value objects - Immutable objects defined by their attributes

mod effect;
mod generation;
mod meta;
mod multilingual;
mod stats;
mod tags;

pub use effect::Effect;
pub use generation::{GenerationModel, DISCONTINUED_MODEL_TAG};
pub use meta::{MetaValue, OpenMap};
pub use multilingual::{Language, MultilingualText};
pub use stats::{MonmusStats, Position};
pub use tags::{
    EffectKind, EffectTarget, EffectTrigger, EventKind, EvolutionTrigger, ItemCategory,
    MapNodeKind, NpcKind, QuestKind, UsageContext,
};
