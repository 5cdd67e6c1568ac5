//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ContentGeneratorPort, PluginSourcePort};
use crate::stores::IdCounter;
use crate::use_cases;
use crate::use_cases::game_data::{ExportGame, ImportGame, ValidateGame};
use crate::use_cases::generation::GenerateContent;
use crate::use_cases::ids::NextId;
use crate::use_cases::plugins::ListPlugins;

/// Main application state.
///
/// Holds the process-wide id counter and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub ids: Arc<IdCounter>,
}

/// Container for all use cases.
pub struct UseCases {
    pub game_data: use_cases::GameDataUseCases,
    pub generation: use_cases::GenerationUseCases,
    pub ids: use_cases::IdUseCases,
    pub plugins: use_cases::PluginUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// The id counter is created here, once, and shared by import and id
    /// minting.
    pub fn new(
        generator: Arc<dyn ContentGeneratorPort>,
        plugin_source: Arc<dyn PluginSourcePort>,
    ) -> Self {
        let ids = Arc::new(IdCounter::new());

        let game_data = use_cases::GameDataUseCases::new(
            Arc::new(ImportGame::new(ids.clone())),
            Arc::new(ExportGame::new()),
            Arc::new(ValidateGame::new()),
        );
        let generation =
            use_cases::GenerationUseCases::new(Arc::new(GenerateContent::new(generator)));
        let id_use_cases = use_cases::IdUseCases::new(Arc::new(NextId::new(ids.clone())));
        let plugins = use_cases::PluginUseCases::new(Arc::new(ListPlugins::new(plugin_source)));

        Self {
            use_cases: UseCases {
                game_data,
                generation,
                ids: id_use_cases,
                plugins,
            },
            ids,
        }
    }
}
