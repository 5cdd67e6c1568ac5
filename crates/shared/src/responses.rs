//! Response bodies returned by the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Successful generation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub success: bool,
    pub generated_text: String,
    /// The model tag the caller asked for, echoed back
    pub model: String,
}

impl GenerateContentResponse {
    pub fn new(generated_text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            success: true,
            generated_text: generated_text.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextIdResponse {
    pub entity_type: String,
    pub next_id: i64,
}

/// Installed plugins keyed by registry name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginListResponse {
    pub plugins: BTreeMap<String, serde_json::Value>,
    pub count: usize,
}

impl From<BTreeMap<String, serde_json::Value>> for PluginListResponse {
    fn from(plugins: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            count: plugins.len(),
            plugins,
        }
    }
}

/// `GET /` document listing the API's entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_count_matches_map() {
        let mut plugins = BTreeMap::new();
        plugins.insert("a".to_string(), serde_json::json!({"name": "a"}));
        plugins.insert("b".to_string(), serde_json::json!({}));
        let response = PluginListResponse::from(plugins);
        assert_eq!(response.count, 2);
    }

    #[test]
    fn generation_response_is_always_successful() {
        let response = GenerateContentResponse::new("text", "gemini-2.5");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["model"], "gemini-2.5");
    }
}
