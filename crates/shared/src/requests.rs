//! Request bodies and query strings accepted by the engine.

use serde::{Deserialize, Serialize};

/// Model tag used when a generation request omits `model`.
pub const DEFAULT_MODEL_TAG: &str = "gemini-2.0";

/// Body of `POST /api/gemini/generate`.
///
/// The API key comes from the caller on every request; the engine never
/// stores it.
#[derive(Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub api_key: String,
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL_TAG.to_string()
}

impl GenerateContentRequest {
    pub fn new(api_key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            prompt: prompt.into(),
            model: default_model(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

// Keep the key out of logs
impl std::fmt::Debug for GenerateContentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateContentRequest")
            .field("api_key", &"<redacted>")
            .field("prompt", &self.prompt)
            .field("model", &self.model)
            .finish()
    }
}

/// `?format=` on `POST /api/export`. Absent means JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportFormatQuery {
    #[serde(default)]
    pub format: Option<String>,
}

/// `?strict=` on `POST /api/validate`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValidateQuery {
    #[serde(default)]
    pub strict: bool,
}
