//! Effect - declarative description of what a skill or item does
//!
//! Effects are never executed here; they are stored, validated for shape, and
//! handed back to whichever runtime plays the game.

use serde::{Deserialize, Serialize};

use super::meta::OpenMap;
use super::tags::{EffectKind, EffectTarget, EffectTrigger};

/// One effect attached to a skill or item. A value object: copied, never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(default)]
    pub trigger: EffectTrigger,
    /// Magnitude; interpretation depends on `kind`
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub target: EffectTarget,
    /// Turns the effect lasts; 0 means instantaneous
    #[serde(default)]
    pub duration: i32,
    /// Kind-specific parameters (e.g. `{"status": "burn", "chance": 0.3}`)
    #[serde(default)]
    pub metadata: OpenMap,
}

impl Effect {
    pub fn new(kind: impl Into<EffectKind>, value: f64) -> Self {
        Self {
            kind: kind.into(),
            trigger: EffectTrigger::default(),
            value,
            target: EffectTarget::default(),
            duration: 0,
            metadata: OpenMap::new(),
        }
    }

    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_duration(mut self, turns: i32) -> Self {
        self.duration = turns;
        self
    }

    pub fn is_instantaneous(&self) -> bool {
        self.duration == 0
    }
}
