//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Content generation (could swap Gemini -> another provider)
//! - Plugin discovery (could swap a directory scan -> a registry service)

mod error;
mod external;

pub use error::ProviderError;
pub use external::{ContentGeneratorPort, PluginManifests, PluginSourcePort};

#[cfg(test)]
pub use external::{MockContentGeneratorPort, MockPluginSourcePort};
