//! Domain types and models
//!
//! Wire-facing types keep the classification service's snake_case field
//! names; optional fields are omitted from JSON when absent.

pub mod analysis;
pub mod feedback;
pub mod health;
pub mod history;
pub mod input;

pub use analysis::{AnalysisResult, AnalysisStatus, Category, StatusReport};
pub use feedback::FeedbackSubmission;
pub use health::{HealthReport, HealthSnapshot, HealthState};
pub use history::HistoryRecord;
pub use input::{AnalysisInput, InputMode, SelectedFile};
