//! External service ports.

use std::collections::BTreeMap;

use async_trait::async_trait;
use monmaker_domain::GenerationModel;

use super::ProviderError;

// =============================================================================
// Content Generation
// =============================================================================

/// Text generation provider.
///
/// Inputs have already passed pre-flight checks when this is called; the
/// provider only reports what the remote service said.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGeneratorPort: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        model: GenerationModel,
    ) -> Result<String, ProviderError>;
}

// =============================================================================
// Plugin Discovery
// =============================================================================

/// Plugin manifests keyed by registry name.
pub type PluginManifests = BTreeMap<String, serde_json::Value>;

/// Source of installed plugin manifests.
///
/// Scanning never fails as a whole: a missing root is an empty result and an
/// unreadable plugin is left out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PluginSourcePort: Send + Sync {
    async fn scan(&self) -> PluginManifests;
}
