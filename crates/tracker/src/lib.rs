//! Skirmish Tracker - application layer for the encounter tracker
//!
//! Owns the roster store, monster admission control, boss/ally builders,
//! catalog types, and the storage port the roster persists through. The
//! pure rules (grouping, health expressions, unit invariants) live in
//! `skirmish-domain`; rendering and confirmation prompts are the embedding
//! UI's concern.

pub mod admission;
pub mod builders;
pub mod catalog;
pub mod decode;
pub mod infrastructure;
pub mod ports;
pub mod roster;
pub mod session;

pub use admission::admit_monsters;
pub use builders::{build_ally, build_boss, next_ally_number};
pub use catalog::{BossLevel, Catalog, HealthValue, MonsterLevel};
pub use decode::{decode_units, Decoded};
pub use ports::{storage_keys, StorageProvider};
pub use roster::Roster;
pub use session::Session;

#[cfg(any(test, feature = "testing"))]
pub use ports::MockStorageProvider;
