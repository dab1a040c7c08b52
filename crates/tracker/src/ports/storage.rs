//! Persistent storage port
//!
//! Abstracts the key-value store (localStorage/file-based) so the roster
//! remains platform-agnostic and testable with mock implementations.
//! Persistence is best-effort from the core's perspective: the port is
//! infallible by contract and adapters log their own failures, because the
//! roster stays correct in memory regardless of persistence success.

/// Persistent key-value storage abstraction.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These define the contract for what keys are used across the tracker:
/// one key for the serialized roster, one for the scenario level.
pub mod storage_keys {
    pub const PLAY_AREA: &str = "skirmish_play_area";
    pub const SCENARIO_LEVEL: &str = "skirmish_scenario_level";
}
