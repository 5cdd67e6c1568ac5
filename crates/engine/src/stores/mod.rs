//! In-memory state storage modules.
//!
//! Stores hold runtime state that outlives a single request:
//! - `IdCounter` - per-entity-type id sequences

pub mod id_counter;

pub use id_counter::{IdCounter, IdCounterError, FIRST_ID};
