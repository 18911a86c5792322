//! Port interfaces for the classification service
//!
//! These traits define the boundaries between the orchestrator and the HTTP
//! adapter. They report raw [`TransportError`]s; core services choose the
//! user-facing message.

use async_trait::async_trait;
use mailtriage_domain::{AnalysisInput, AnalysisResult, HealthReport, StatusReport, TransportError};

/// Sends an email to the classification endpoint
#[async_trait]
pub trait ClassificationGateway: Send + Sync {
    /// Submit exactly one of file or text and return the analysis
    async fn process(&self, input: &AnalysisInput) -> Result<AnalysisResult, TransportError>;
}

/// Reads service health
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check_health(&self) -> Result<HealthReport, TransportError>;
}

/// Looks up the server-side status of a past analysis
#[async_trait]
pub trait StatusLookup: Send + Sync {
    async fn status(&self, analysis_id: &str) -> Result<StatusReport, TransportError>;
}
