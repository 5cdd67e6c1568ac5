//! Aggregate roots - domain objects that own their related data
//!
//! `GameData` is the only aggregate: every entity lives inside exactly one
//! game document and has no lifecycle outside it.

pub mod game_data;

pub use game_data::{GameData, DEFAULT_GAME_VERSION};
