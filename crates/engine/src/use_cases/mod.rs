//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! ports, stores and the domain to fulfill one API operation each.

pub mod game_data;
pub mod generation;
pub mod ids;
pub mod plugins;
pub mod validation;

// Re-export main types
pub use game_data::GameDataUseCases;
pub use generation::{GenerationError, GenerationUseCases};
pub use ids::IdUseCases;
pub use plugins::PluginUseCases;
