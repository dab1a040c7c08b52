//! Port traits for infrastructure boundaries.
//!
//! The only abstraction in the tracker: the persistent key-value store the
//! roster and scenario level write through. Everything else is concrete.

mod storage;

pub use storage::{storage_keys, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use storage::MockStorageProvider;
