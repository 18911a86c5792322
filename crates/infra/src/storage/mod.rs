//! Key-value store adapters backing the history cache

pub mod file;
pub mod memory;

pub use file::{default_data_dir, FileKeyValueStore};
pub use memory::MemoryKeyValueStore;
