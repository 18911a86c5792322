//! CLI commands - thin wrappers over the core services

mod analyze;
mod feedback;
mod health;
mod history;
pub mod render;
mod shell;
mod status;

pub use analyze::*;
pub use feedback::*;
pub use health::*;
pub use history::*;
pub use shell::*;
pub use status::*;
