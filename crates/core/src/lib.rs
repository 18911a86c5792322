//! # MailTriage Core
//!
//! Client-side analysis orchestration - no infrastructure dependencies.
//!
//! This crate contains:
//! - Input validation and the mutually exclusive email form
//! - The single-in-flight request dispatcher
//! - The analysis session (result state manager)
//! - The bounded history cache
//! - Feedback drafting and submission
//! - Port interfaces (traits) for every external collaborator
//!
//! ## Architecture Principles
//! - Depends only on `mailtriage-domain` and `mailtriage-common`
//! - No HTTP, filesystem or platform code
//! - All external collaborators via traits

pub mod analysis;
pub mod feedback;
pub mod health;
pub mod history;
pub mod input;

// Re-export specific items to avoid ambiguity
pub use analysis::ports::{ClassificationGateway, HealthProbe, StatusLookup};
pub use analysis::{
    lookup_status, AnalysisOutcome, AnalysisSession, AnalysisState, RequestDispatcher,
};
pub use feedback::ports::FeedbackGateway;
pub use feedback::{FeedbackDraft, FeedbackSubmitter};
pub use health::probe_health;
pub use history::ports::KeyValueStore;
pub use history::HistoryCache;
pub use input::{EmailForm, FormInput, InputValidator};
