//! Classification service integration

pub mod client;
mod types;

pub use client::ClassifierClient;
