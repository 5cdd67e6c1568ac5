//! Export a game document.

use monmaker_domain::GameData;

use crate::infrastructure::codec::{self, DocumentFormat, ExportError};

/// A serialized game document ready to be sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub format: DocumentFormat,
    pub body: String,
}

impl ExportedDocument {
    /// Suggested download name, e.g. `game_data.yaml`.
    pub fn filename(&self) -> String {
        format!("game_data.{}", self.format.file_extension())
    }
}

/// Serializes `GameData` field for field, with no transformation.
pub struct ExportGame;

impl ExportGame {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        data: &GameData,
        format: DocumentFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let body = codec::encode(data, format)?;
        tracing::debug!(
            format = %format,
            entities = data.entity_count(),
            bytes = body.len(),
            "Exported game document"
        );
        Ok(ExportedDocument { format, body })
    }
}

impl Default for ExportGame {
    fn default() -> Self {
        Self::new()
    }
}
