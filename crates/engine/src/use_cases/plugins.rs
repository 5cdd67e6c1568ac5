//! Plugin listing use cases.

use std::sync::Arc;

use monmaker_shared::PluginListResponse;

use crate::infrastructure::ports::PluginSourcePort;

/// Container for plugin use cases.
pub struct PluginUseCases {
    pub list: Arc<ListPlugins>,
}

impl PluginUseCases {
    pub fn new(list: Arc<ListPlugins>) -> Self {
        Self { list }
    }
}

/// Lists installed plugins. Every call rescans the source.
pub struct ListPlugins {
    source: Arc<dyn PluginSourcePort>,
}

impl ListPlugins {
    pub fn new(source: Arc<dyn PluginSourcePort>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> PluginListResponse {
        let plugins = self.source.scan().await;
        tracing::debug!(count = plugins.len(), "Listed plugins");
        PluginListResponse::from(plugins)
    }
}
