//! Game document use cases: import, export and reference validation.

use std::sync::Arc;

mod export;
mod import;
mod validate;

pub use export::{ExportGame, ExportedDocument};
pub use import::{ImportGame, RESYNCED_KINDS};
pub use validate::ValidateGame;

/// Container for game document use cases.
pub struct GameDataUseCases {
    pub import: Arc<ImportGame>,
    pub export: Arc<ExportGame>,
    pub validate: Arc<ValidateGame>,
}

impl GameDataUseCases {
    pub fn new(import: Arc<ImportGame>, export: Arc<ExportGame>, validate: Arc<ValidateGame>) -> Self {
        Self {
            import,
            export,
            validate,
        }
    }
}
