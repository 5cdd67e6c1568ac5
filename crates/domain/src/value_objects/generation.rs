//! Generation model tags accepted by the content-generation proxy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Tag that is no longer served; rejected with a dedicated hint.
pub const DISCONTINUED_MODEL_TAG: &str = "gemini-1.5";

/// Closed set of model tags callers may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationModel {
    #[serde(rename = "gemini-2.0")]
    Gemini20,
    #[serde(rename = "gemini-2.5")]
    Gemini25,
}

impl GenerationModel {
    pub const SUPPORTED: [GenerationModel; 2] = [Self::Gemini20, Self::Gemini25];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini20 => "gemini-2.0",
            Self::Gemini25 => "gemini-2.5",
        }
    }
}

impl fmt::Display for GenerationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Unsupported model '{s}'. Use gemini-2.0 or gemini-2.5 ({DISCONTINUED_MODEL_TAG} is no longer supported)"
                ))
            })
    }
}
