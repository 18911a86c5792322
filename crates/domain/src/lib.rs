//! # MailTriage Domain
//!
//! Business domain types and models for the MailTriage client.
//!
//! This crate contains:
//! - Analysis data types (inputs, results, history records, feedback)
//! - Wire shapes of the classification service
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other MailTriage crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
