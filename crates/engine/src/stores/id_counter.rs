//! Process-wide id counter.
//!
//! One counter per entity-type namespace. Each counter holds the next id to
//! hand out. `get_next` and `reset` each run inside one critical section, so
//! concurrent requests never observe a torn read-then-increment.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use monmaker_domain::EntityKind;

/// Value every namespace starts from.
pub const FIRST_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdCounterError {
    #[error("No ids left for '{entity_type}': the counter cannot advance past {current}")]
    Exhausted { entity_type: String, current: i64 },
}

/// Per-namespace id counter shared by all handlers.
///
/// Construct one per process (tests construct one per test) and share it
/// behind an `Arc`.
pub struct IdCounter {
    counters: Mutex<HashMap<String, i64>>,
}

impl IdCounter {
    /// Create a counter with every known namespace at [`FIRST_ID`].
    pub fn new() -> Self {
        let counters = EntityKind::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), FIRST_ID))
            .collect();
        Self {
            counters: Mutex::new(counters),
        }
    }

    /// Return the current value for `entity_type` and advance it by one.
    ///
    /// Unknown namespaces are admitted with a fresh counter, so the first call
    /// for them returns [`FIRST_ID`]. A counter that cannot advance is left
    /// untouched and reported as exhausted, so no id is ever handed out twice.
    pub fn get_next(&self, entity_type: &str) -> Result<i64, IdCounterError> {
        let mut counters = self.lock();
        let slot = counters.entry(entity_type.to_string()).or_insert(FIRST_ID);
        let current = *slot;
        *slot = current
            .checked_add(1)
            .ok_or_else(|| IdCounterError::Exhausted {
                entity_type: entity_type.to_string(),
                current,
            })?;
        Ok(current)
    }

    /// Overwrite the counter for `entity_type`. The next `get_next` returns `value`.
    pub fn reset(&self, entity_type: &str, value: i64) {
        self.lock().insert(entity_type.to_string(), value);
    }

    /// The value `get_next` would return, without advancing.
    pub fn peek(&self, entity_type: &str) -> i64 {
        self.lock().get(entity_type).copied().unwrap_or(FIRST_ID)
    }

    // A panic while holding the lock cannot leave the map half-updated,
    // so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        self.counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_call_returns_one_and_sequence_increases() {
        let counter = IdCounter::new();
        assert_eq!(counter.get_next("skills").unwrap(), 1);
        assert_eq!(counter.get_next("skills").unwrap(), 2);
        assert_eq!(counter.get_next("skills").unwrap(), 3);
    }

    #[test]
    fn namespaces_are_independent() {
        let counter = IdCounter::new();
        counter.get_next("skills").unwrap();
        counter.get_next("skills").unwrap();
        assert_eq!(counter.get_next("items").unwrap(), 1);
        assert_eq!(counter.peek("skills"), 3);
    }

    #[test]
    fn unknown_namespace_is_admitted() {
        let counter = IdCounter::new();
        assert_eq!(counter.peek("weather"), 1);
        assert_eq!(counter.get_next("weather").unwrap(), 1);
        assert_eq!(counter.get_next("weather").unwrap(), 2);
    }

    #[test]
    fn reset_sets_the_next_value() {
        let counter = IdCounter::new();
        counter.get_next("monmus").unwrap();
        counter.reset("monmus", 8);
        assert_eq!(counter.get_next("monmus").unwrap(), 8);
        assert_eq!(counter.get_next("monmus").unwrap(), 9);
    }

    #[test]
    fn reset_may_move_backwards() {
        let counter = IdCounter::new();
        counter.reset("items", 50);
        counter.reset("items", 3);
        assert_eq!(counter.get_next("items").unwrap(), 3);
    }

    #[test]
    fn peek_does_not_advance() {
        let counter = IdCounter::new();
        assert_eq!(counter.peek("quests"), 1);
        assert_eq!(counter.peek("quests"), 1);
        assert_eq!(counter.get_next("quests").unwrap(), 1);
    }

    #[test]
    fn exhausted_counter_fails_instead_of_repeating() {
        let counter = IdCounter::new();
        counter.reset("skills", i64::MAX - 1);

        assert_eq!(counter.get_next("skills").unwrap(), i64::MAX - 1);
        let err = counter.get_next("skills").unwrap_err();
        assert_eq!(
            err,
            IdCounterError::Exhausted {
                entity_type: "skills".into(),
                current: i64::MAX,
            }
        );
        assert!(counter.get_next("skills").is_err());
        assert_eq!(counter.peek("skills"), i64::MAX);
    }

    #[test]
    fn concurrent_callers_never_receive_the_same_id() {
        let counter = Arc::new(IdCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    (0..100).map(|_| counter.get_next("npcs").unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 800);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&800));
    }
}
