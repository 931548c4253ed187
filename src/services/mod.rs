pub mod storage_service;
pub mod memory_store;
pub mod ticker;

pub use storage_service::{KeyValueStore, LocalStorageStore, StorageError};
pub use memory_store::MemoryStore;
pub use ticker::{IntervalTicker, TickHandle, Ticker};
