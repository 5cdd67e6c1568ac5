//! Gemini client (Generative Language REST API)

use async_trait::async_trait;
use monmaker_domain::GenerationModel;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{ContentGeneratorPort, ProviderError};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Generation requests can be slow.
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

/// Markers Gemini puts in the error body when the key itself is bad.
const INVALID_KEY_MARKERS: [&str; 2] = ["API_KEY_INVALID", "API key not valid"];

/// Client for Gemini's `generateContent` endpoint.
///
/// Holds no credentials: the caller's key travels with each request.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_GEMINI_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: GenerationModel) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            provider_model_id(model)
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_GEMINI_BASE_URL)
    }
}

#[async_trait]
impl ContentGeneratorPort for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        model: GenerationModel,
    ) -> Result<String, ProviderError> {
        let api_request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| ProviderError::RequestFailed(e.without_url().to_string()))?;
            return Err(classify_failure(status, &error_text));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.without_url().to_string()))?;

        extract_text(api_response)
    }
}

/// Provider model id behind each supported tag.
pub fn provider_model_id(model: GenerationModel) -> &'static str {
    match model {
        GenerationModel::Gemini20 => "gemini-2.0-flash",
        GenerationModel::Gemini25 => "gemini-2.5-flash",
    }
}

fn classify_failure(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    let key_rejected = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || INVALID_KEY_MARKERS.iter().any(|marker| body.contains(marker));

    if key_rejected {
        ProviderError::Unauthorized(message)
    } else {
        ProviderError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), message))
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        return Err(ProviderError::InvalidResponse(
            "Candidate contained no text".to_string(),
        ));
    }
    Ok(text)
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
