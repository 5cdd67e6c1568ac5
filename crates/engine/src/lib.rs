//! MonMaker Engine library.
//!
//! Server-side code for the MonMaker content editor.
//!
//! ## Structure
//!
//! - `stores/` - Process-wide in-memory state (the id counter)
//! - `use_cases/` - One orchestrator per API operation
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures shared across modules.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::EngineConfig;
