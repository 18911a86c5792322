//! # MailTriage CLI
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - The `mailtriage` command-line interface (one-shot commands and an
//!   interactive shell)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use context::AppContext;
