use serde::{Deserialize, Serialize};

/// The six base stats of a monmus. Every stat is optional on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonmusStats {
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default = "default_stat")]
    pub attack: i32,
    #[serde(default = "default_stat")]
    pub defense: i32,
    #[serde(default = "default_stat")]
    pub sp_attack: i32,
    #[serde(default = "default_stat")]
    pub sp_defense: i32,
    #[serde(default = "default_stat")]
    pub speed: i32,
}

fn default_hp() -> i32 {
    100
}

fn default_stat() -> i32 {
    50
}

impl MonmusStats {
    /// Sum of all six stats.
    pub fn total(&self) -> i32 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

impl Default for MonmusStats {
    fn default() -> Self {
        Self {
            hp: default_hp(),
            attack: default_stat(),
            defense: default_stat(),
            sp_attack: default_stat(),
            sp_defense: default_stat(),
            speed: default_stat(),
        }
    }
}

/// 2D editor position of a map node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let stats: MonmusStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, MonmusStats::default());
        assert_eq!(stats.total(), 350);
    }
}
