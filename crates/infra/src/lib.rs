//! # MailTriage Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The classification service client (HTTP, multipart)
//! - File-backed and in-memory key-value stores for the history cache
//! - Configuration loading (files and environment)
//! - Email file reading
//!
//! ## Architecture
//! - Implements traits defined in `mailtriage-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod classifier;
pub mod config;
pub mod errors;
pub mod files;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use classifier::ClassifierClient;
pub use errors::InfraError;
pub use files::read_email_file;
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::{default_data_dir, FileKeyValueStore, MemoryKeyValueStore};
