//! One-shot analysis with optional immediate feedback

use std::path::PathBuf;

use mailtriage_domain::{AnalysisResult, Result};
use mailtriage_infra::read_email_file;
use serde::Serialize;
use tracing::warn;

use crate::context::AppContext;

/// Where the email comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailSource {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub source: EmailSource,
    /// Sending feedback is only attempted when a rating is given
    pub rating: Option<u8>,
    /// Edited reply; sent only if it differs from the suggestion
    pub reply: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(source: EmailSource) -> Self {
        Self { source, rating: None, reply: None }
    }
}

/// What happened to the feedback attached to an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FeedbackStatus {
    NotRequested,
    Sent,
    /// The analysis succeeded but the feedback was refused
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeReport {
    pub result: AnalysisResult,
    pub feedback: FeedbackStatus,
}

/// Validate, classify and record one email.
///
/// Input rejections and service failures are returned as errors. A feedback
/// failure after a successful analysis is reported in the returned
/// [`FeedbackStatus`] instead, since the analysis is already in history.
pub async fn analyze(ctx: &AppContext, request: AnalyzeRequest) -> Result<AnalyzeReport> {
    let mut session = ctx.session();
    match request.source {
        EmailSource::File(path) => session.select_file(read_email_file(&path)?)?,
        EmailSource::Text(text) => session.set_text(text)?,
    }

    let result = session.submit().await?;

    let Some(rating) = request.rating else {
        return Ok(AnalyzeReport { result, feedback: FeedbackStatus::NotRequested });
    };

    if let Some(reply) = request.reply {
        session.edit_reply(reply)?;
    }
    session.set_rating(rating)?;

    let submission = session.feedback_submission()?;
    let feedback = match ctx.feedback.submit(&submission).await {
        Ok(()) => FeedbackStatus::Sent,
        Err(err) => {
            warn!(analysis_id = %result.id, error = %err, "Analysis kept, feedback not sent");
            FeedbackStatus::Failed(err.to_string())
        }
    };

    Ok(AnalyzeReport { result, feedback })
}
