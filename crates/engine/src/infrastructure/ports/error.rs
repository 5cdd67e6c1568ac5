//! Error types for port operations.

/// Failure reported by a content-generation provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider rejected the API key.
    #[error("Provider rejected the API key: {0}")]
    Unauthorized(String),
    #[error("Provider request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
