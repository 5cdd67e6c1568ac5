//! Game document codec (JSON and YAML)
//!
//! Decoding runs in two stages so callers can tell a file that is not JSON
//! or YAML at all apart from one that parses but does not fit `GameData`:
//! 1. bytes -> generic document tree (syntax)
//! 2. tree -> `GameData` (schema)

use std::fmt;
use std::str::FromStr;

use monmaker_domain::{EntityKind, GameData};

/// Serialized document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file name's extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, ImportError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ImportError::UnsupportedFormat {
                filename: filename.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the `?format=` value of an export request.
impl FromStr for DocumentFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Import failures, one variant per diagnosable cause.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Unsupported file format '{filename}'. Upload a JSON (.json) or YAML (.yaml, .yml) file")]
    UnsupportedFormat { filename: String },

    #[error("{format} parsing failed: {message}. Check that the file is valid {format}")]
    Syntax {
        format: DocumentFormat,
        message: String,
    },

    #[error("Game data does not match the schema: {0}")]
    Schema(String),

    #[error("{entity_type} ID {max_id} is too large: no ids would be left to assign after it")]
    IdSpaceExhausted { entity_type: EntityKind, max_id: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported export format '{0}'. Use json or yaml")]
    UnsupportedFormat(String),

    #[error("Failed to serialize game data: {0}")]
    Serialization(String),
}

/// Decode a document in the given format into `GameData`.
///
/// Unknown fields are ignored; missing optional fields take their defaults.
pub fn decode(bytes: &[u8], format: DocumentFormat) -> Result<GameData, ImportError> {
    match format {
        DocumentFormat::Json => {
            let tree: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| ImportError::Syntax {
                    format,
                    message: e.to_string(),
                })?;
            serde_json::from_value(tree).map_err(|e| ImportError::Schema(e.to_string()))
        }
        DocumentFormat::Yaml => {
            let tree: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| ImportError::Syntax {
                    format,
                    message: e.to_string(),
                })?;
            serde_yaml::from_value(tree).map_err(|e| ImportError::Schema(e.to_string()))
        }
    }
}

/// Encode `GameData` field for field. JSON output is pretty-printed.
pub fn encode(data: &GameData, format: DocumentFormat) -> Result<String, ExportError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(data)
            .map_err(|e| ExportError::Serialization(e.to_string())),
        DocumentFormat::Yaml => {
            serde_yaml::to_string(data).map_err(|e| ExportError::Serialization(e.to_string()))
        }
    }
}
