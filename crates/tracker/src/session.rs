//! Session - explicit context object for one tracker instance
//!
//! Holds the roster store and the scenario level, constructed once at
//! startup from a storage provider and passed by reference to whatever
//! needs it. No module-level singletons.

use std::sync::Arc;

use crate::ports::{storage_keys, StorageProvider};
use crate::roster::Roster;

pub struct Session {
    roster: Roster,
    scenario_level: Option<i32>,
    storage: Arc<dyn StorageProvider>,
}

impl Session {
    /// Load persisted state through the storage port. Malformed persisted
    /// values never fail startup: the roster decodes with defaults and a
    /// malformed scenario level falls back to absent.
    pub fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let scenario_level = storage
            .load(storage_keys::SCENARIO_LEVEL)
            .and_then(|raw| match serde_json::from_str::<Option<i32>>(&raw) {
                Ok(level) => level,
                Err(e) => {
                    tracing::warn!("Discarding persisted scenario level: {}", e);
                    None
                }
            });
        Self {
            roster: Roster::load(Arc::clone(&storage)),
            scenario_level,
            storage,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn scenario_level(&self) -> Option<i32> {
        self.scenario_level
    }

    /// Set the scenario level and persist it.
    pub fn set_scenario_level(&mut self, level: Option<i32>) {
        self.scenario_level = level;
        match serde_json::to_string(&level) {
            Ok(json) => self.storage.save(storage_keys::SCENARIO_LEVEL, &json),
            Err(e) => tracing::error!("Failed to serialize scenario level: {}", e),
        }
    }

    /// Start over: clear both persisted keys, empty the roster, and drop
    /// the scenario level. Asking the user for confirmation is the UI's
    /// concern; this operation is unconditional.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.scenario_level = None;
        self.storage.remove(storage_keys::SCENARIO_LEVEL);
        tracing::info!("encounter state reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    fn session_with_memory() -> (Session, MemoryStorage) {
        let storage = MemoryStorage::new();
        let session = Session::load(Arc::new(storage.clone()));
        (session, storage)
    }

    #[test]
    fn scenario_level_defaults_to_absent() {
        let (session, _) = session_with_memory();
        assert_eq!(session.scenario_level(), None);
    }

    #[test]
    fn scenario_level_persists_and_reloads() {
        let (mut session, storage) = session_with_memory();
        session.set_scenario_level(Some(3));
        assert_eq!(
            storage.load(storage_keys::SCENARIO_LEVEL),
            Some("3".to_string())
        );

        let reloaded = Session::load(Arc::new(storage));
        assert_eq!(reloaded.scenario_level(), Some(3));
    }

    #[test]
    fn persisted_null_level_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.save(storage_keys::SCENARIO_LEVEL, "null");
        let session = Session::load(Arc::new(storage));
        assert_eq!(session.scenario_level(), None);
    }

    #[test]
    fn malformed_persisted_level_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.save(storage_keys::SCENARIO_LEVEL, "not a number");
        let session = Session::load(Arc::new(storage));
        assert_eq!(session.scenario_level(), None);
    }

    #[test]
    fn reset_clears_roster_level_and_both_keys() {
        let (mut session, storage) = session_with_memory();
        session.set_scenario_level(Some(2));
        session.roster_mut().add_ally("Bob", 10);
        assert!(storage.load(storage_keys::PLAY_AREA).is_some());

        session.reset();

        assert!(session.roster().units().is_empty());
        assert_eq!(session.scenario_level(), None);
        assert_eq!(storage.load(storage_keys::PLAY_AREA), None);
        assert_eq!(storage.load(storage_keys::SCENARIO_LEVEL), None);
    }
}
