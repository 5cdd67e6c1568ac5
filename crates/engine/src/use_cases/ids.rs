//! Id minting use cases.

use std::sync::Arc;

use monmaker_shared::NextIdResponse;

use crate::stores::{IdCounter, IdCounterError};

/// Container for id use cases.
pub struct IdUseCases {
    pub next: Arc<NextId>,
}

impl IdUseCases {
    pub fn new(next: Arc<NextId>) -> Self {
        Self { next }
    }
}

/// Hands out the next id for an entity-type namespace.
///
/// Any namespace string is accepted; unknown ones start at 1.
pub struct NextId {
    ids: Arc<IdCounter>,
}

impl NextId {
    pub fn new(ids: Arc<IdCounter>) -> Self {
        Self { ids }
    }

    pub fn execute(&self, entity_type: &str) -> Result<NextIdResponse, IdCounterError> {
        let next_id = self.ids.get_next(entity_type)?;
        tracing::debug!(entity_type = %entity_type, next_id, "Minted id");
        Ok(NextIdResponse {
            entity_type: entity_type.to_string(),
            next_id,
        })
    }
}
