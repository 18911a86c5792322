//! Feedback submission service

use std::sync::Arc;

use mailtriage_common::validation::{RangeValidator, StringValidator, ValidationError};
use mailtriage_domain::constants::{FEEDBACK_FALLBACK, MAX_COMMENT_CHARS, MAX_RATING, MIN_RATING};
use mailtriage_domain::{FeedbackSubmission, Result, TriageError};
use tracing::{info, warn};

use super::ports::FeedbackGateway;

/// Validates and sends feedback.
///
/// Whether a rating is required is left to the caller; an absent rating is
/// valid here. Concurrent submissions are not guarded.
pub struct FeedbackSubmitter {
    gateway: Arc<dyn FeedbackGateway>,
    rating: RangeValidator<u8>,
    analysis_id: StringValidator,
    comments: StringValidator,
}

impl FeedbackSubmitter {
    pub fn new(gateway: Arc<dyn FeedbackGateway>) -> Self {
        Self {
            gateway,
            rating: RangeValidator::new(MIN_RATING, MAX_RATING),
            analysis_id: StringValidator::new().not_empty(),
            comments: StringValidator::new().trim(false).max_length(MAX_COMMENT_CHARS),
        }
    }

    pub fn validate(&self, feedback: &FeedbackSubmission) -> std::result::Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.check("analysis_id", &self.analysis_id, feedback.analysis_id.as_str());
        if let Some(rating) = feedback.rating {
            errors.check("rating", &self.rating, &rating);
        }
        if let Some(comments) = feedback.comments.as_deref() {
            errors.check("comments", &self.comments, comments);
        }
        errors.into_result(())
    }

    pub async fn submit(&self, feedback: &FeedbackSubmission) -> Result<()> {
        self.validate(feedback).map_err(|e| TriageError::InvalidInput(e.to_string()))?;

        match self.gateway.submit_feedback(feedback).await {
            Ok(()) => {
                info!(
                    analysis_id = %feedback.analysis_id,
                    rating = ?feedback.rating,
                    edited = feedback.edited_reply.is_some(),
                    "Feedback submitted"
                );
                Ok(())
            }
            Err(err) => {
                warn!(analysis_id = %feedback.analysis_id, error = %err, "Feedback submission failed");
                Err(err.into_triage(FEEDBACK_FALLBACK))
            }
        }
    }
}
