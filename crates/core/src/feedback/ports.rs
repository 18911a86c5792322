use async_trait::async_trait;
use mailtriage_domain::{FeedbackSubmission, TransportError};

/// Posts user feedback on a past analysis
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Any 2xx is success; the response body is ignored
    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<(), TransportError>;
}
