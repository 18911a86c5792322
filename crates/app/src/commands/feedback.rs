use mailtriage_domain::{FeedbackSubmission, Result};

use crate::context::AppContext;

/// Send feedback for a past analysis identified by id.
pub async fn send_feedback(ctx: &AppContext, mut submission: FeedbackSubmission) -> Result<()> {
    submission.analysis_id = submission.analysis_id.trim().to_string();
    ctx.feedback.submit(&submission).await
}
