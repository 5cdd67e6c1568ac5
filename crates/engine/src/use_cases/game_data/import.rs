//! Import a game document and realign the id counter with it.

use std::sync::Arc;

use monmaker_domain::{EntityKind, GameData};

use crate::infrastructure::codec::{self, DocumentFormat, ImportError};
use crate::stores::IdCounter;

/// Namespaces realigned after an import. NPC and quest counters are left alone.
pub const RESYNCED_KINDS: [EntityKind; 4] = [
    EntityKind::Attributes,
    EntityKind::Skills,
    EntityKind::Items,
    EntityKind::Monmus,
];

/// Parses an uploaded document into `GameData`.
///
/// On success every non-empty resynced collection moves its counter to
/// `max(id) + 1`. Empty collections leave their counter untouched. A failed
/// import never touches the counter.
pub struct ImportGame {
    ids: Arc<IdCounter>,
}

impl ImportGame {
    pub fn new(ids: Arc<IdCounter>) -> Self {
        Self { ids }
    }

    pub fn execute(&self, bytes: &[u8], filename: &str) -> Result<GameData, ImportError> {
        let format = DocumentFormat::from_filename(filename)?;
        let data = codec::decode(bytes, format)?;

        tracing::debug!(
            filename = %filename,
            format = %format,
            entities = data.entity_count(),
            "Imported game document"
        );

        self.resync_counters(&data)?;
        Ok(data)
    }

    // Every next value is computed before any counter moves, so a rejected
    // document leaves all counters as they were.
    fn resync_counters(&self, data: &GameData) -> Result<(), ImportError> {
        let mut plan = Vec::with_capacity(RESYNCED_KINDS.len());
        for kind in RESYNCED_KINDS {
            let Some(max_id) = max_id(data, kind) else {
                continue;
            };
            let next = max_id
                .checked_add(1)
                .ok_or(ImportError::IdSpaceExhausted {
                    entity_type: kind,
                    max_id,
                })?;
            plan.push((kind, next));
        }

        for (kind, next) in plan {
            self.ids.reset(kind.as_str(), next);
            tracing::debug!(entity_type = %kind, next_id = next, "Realigned id counter");
        }
        Ok(())
    }
}

fn max_id(data: &GameData, kind: EntityKind) -> Option<i64> {
    match kind {
        EntityKind::Attributes => data.max_attribute_id().map(i64::from),
        EntityKind::Skills => data.max_skill_id().map(i64::from),
        EntityKind::Items => data.max_item_id().map(i64::from),
        EntityKind::Monmus => data.max_monmus_id().map(i64::from),
        EntityKind::Npcs => data.max_npc_id().map(i64::from),
        EntityKind::Quests => data.max_quest_id().map(i64::from),
    }
}
