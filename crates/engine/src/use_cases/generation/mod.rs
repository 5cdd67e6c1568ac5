//! Content generation use cases.
//!
//! Requests are checked locally before the provider is contacted, so a bad
//! key, an empty prompt or a retired model never costs a network round-trip.

use std::sync::Arc;

use monmaker_domain::{DomainError, GenerationModel};
use monmaker_shared::{GenerateContentRequest, GenerateContentResponse};

use crate::infrastructure::ports::{ContentGeneratorPort, ProviderError};
use crate::use_cases::validation::{require_min_length, require_non_empty, ValidationError};

/// Keys shorter than this are rejected without calling the provider.
pub const MIN_API_KEY_LENGTH: usize = 10;

/// Container for generation use cases.
pub struct GenerationUseCases {
    pub generate: Arc<GenerateContent>,
}

impl GenerationUseCases {
    pub fn new(generate: Arc<GenerateContent>) -> Self {
        Self { generate }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[source] ValidationError),

    #[error("Empty prompt: {0}")]
    EmptyPrompt(#[source] ValidationError),

    #[error("{0}")]
    UnsupportedModel(#[source] DomainError),

    #[error("Invalid API key. Check your Gemini API key: {0}")]
    Unauthorized(String),

    #[error("Gemini API call failed: {0}")]
    Provider(String),
}

impl GenerationError {
    /// True when the request was rejected before reaching the provider.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey(_) | Self::EmptyPrompt(_) | Self::UnsupportedModel(_)
        )
    }
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unauthorized(message) => Self::Unauthorized(message),
            other => Self::Provider(other.to_string()),
        }
    }
}

/// Proxies one prompt to the configured generator.
pub struct GenerateContent {
    generator: Arc<dyn ContentGeneratorPort>,
}

impl GenerateContent {
    pub fn new(generator: Arc<dyn ContentGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let model = preflight(&request)?;

        let text = self
            .generator
            .generate(&request.api_key, &request.prompt, model)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, model = %model, "Content generation failed");
                GenerationError::from(e)
            })?;

        tracing::info!(model = %model, chars = text.chars().count(), "Generated content");
        Ok(GenerateContentResponse::new(text, request.model))
    }
}

/// Local checks, in order: key, prompt, model.
fn preflight(request: &GenerateContentRequest) -> Result<GenerationModel, GenerationError> {
    require_min_length(&request.api_key, MIN_API_KEY_LENGTH, "api_key")
        .map_err(GenerationError::InvalidApiKey)?;
    require_non_empty(&request.prompt, "prompt").map_err(GenerationError::EmptyPrompt)?;
    request
        .model
        .parse::<GenerationModel>()
        .map_err(GenerationError::UnsupportedModel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockContentGeneratorPort;

    const VALID_KEY: &str = "aaaaaaaaaaaaaaaaaaaa";

    fn never_called() -> GenerateContent {
        let mut generator = MockContentGeneratorPort::new();
        generator.expect_generate().times(0);
        GenerateContent::new(Arc::new(generator))
    }

    #[tokio::test]
    async fn short_key_is_rejected_locally() {
        let err = never_called()
            .execute(GenerateContentRequest::new("short", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidApiKey(_)));
    }

    #[tokio::test]
    async fn empty_key_is_rejected_locally() {
        let err = never_called()
            .execute(GenerateContentRequest::new("", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidApiKey(_)));
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_locally() {
        for prompt in ["", "   \n\t"] {
            let err = never_called()
                .execute(GenerateContentRequest::new(VALID_KEY, prompt))
                .await
                .unwrap_err();
            assert!(matches!(err, GenerationError::EmptyPrompt(_)));
        }
    }

    #[tokio::test]
    async fn retired_model_is_rejected_locally() {
        let err = never_called()
            .execute(GenerateContentRequest::new(VALID_KEY, "hi").with_model("gemini-1.5"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedModel(_)));
        assert!(err.is_preflight());
        assert!(err.to_string().contains("gemini-1.5"));
    }

    #[tokio::test]
    async fn key_is_checked_before_prompt() {
        let err = never_called()
            .execute(GenerateContentRequest::new("short", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidApiKey(_)));
    }

    #[tokio::test]
    async fn success_echoes_requested_model() {
        let mut generator = MockContentGeneratorPort::new();
        generator
            .expect_generate()
            .withf(|key, prompt, model| {
                key == VALID_KEY && prompt == "make a fire monmus" && *model == GenerationModel::Gemini25
            })
            .times(1)
            .returning(|_, _, _| Ok("Ember fox".to_string()));

        let response = GenerateContent::new(Arc::new(generator))
            .execute(
                GenerateContentRequest::new(VALID_KEY, "make a fire monmus")
                    .with_model("gemini-2.5"),
            )
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.generated_text, "Ember fox");
        assert_eq!(response.model, "gemini-2.5");
    }

    #[tokio::test]
    async fn provider_auth_failure_maps_to_unauthorized() {
        let mut generator = MockContentGeneratorPort::new();
        generator
            .expect_generate()
            .returning(|_, _, _| Err(ProviderError::Unauthorized("API key not valid".into())));

        let err = GenerateContent::new(Arc::new(generator))
            .execute(GenerateContentRequest::new(VALID_KEY, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Unauthorized(_)));
        assert!(!err.is_preflight());
    }

    #[tokio::test]
    async fn other_provider_failures_keep_the_message() {
        let mut generator = MockContentGeneratorPort::new();
        generator
            .expect_generate()
            .returning(|_, _, _| Err(ProviderError::RequestFailed("quota exceeded".into())));

        let err = GenerateContent::new(Arc::new(generator))
            .execute(GenerateContentRequest::new(VALID_KEY, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Provider(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
