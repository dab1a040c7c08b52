//! Concrete storage adapters behind the `StorageProvider` port.

mod storage;

pub use storage::{FileStorage, MemoryStorage};
