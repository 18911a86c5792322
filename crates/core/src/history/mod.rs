//! Bounded local history of past analyses

pub mod cache;
pub mod ports;

pub use cache::HistoryCache;
pub use ports::KeyValueStore;
