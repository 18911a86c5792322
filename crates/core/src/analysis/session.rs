//! Analysis session - the result state manager
//!
//! Owns the email form and the current state, drives the dispatcher, and is
//! the only writer of history records.

use std::sync::Arc;

use mailtriage_domain::{
    AnalysisResult, FeedbackSubmission, HistoryRecord, InputMode, InputRejection, Result,
    SelectedFile, TriageError,
};
use tracing::{debug, error};

use super::dispatcher::RequestDispatcher;
use crate::feedback::FeedbackDraft;
use crate::history::HistoryCache;
use crate::input::EmailForm;

/// A successful analysis together with the user's local reply edits
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub draft: FeedbackDraft,
}

/// What the session currently shows. Result and error never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Submitting { mode: InputMode },
    Success(Box<AnalysisOutcome>),
    Failure { message: String },
}

impl AnalysisState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting { .. } => "submitting",
            Self::Success(_) => "success",
            Self::Failure { .. } => "failure",
        }
    }
}

pub struct AnalysisSession {
    form: EmailForm,
    state: AnalysisState,
    dispatcher: Arc<RequestDispatcher>,
    history: Arc<HistoryCache>,
}

impl AnalysisSession {
    pub fn new(dispatcher: Arc<RequestDispatcher>, history: Arc<HistoryCache>) -> Self {
        Self { form: EmailForm::new(), state: AnalysisState::Idle, dispatcher, history }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn form(&self) -> &EmailForm {
        &self.form
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            AnalysisState::Success(outcome) => Some(&outcome.result),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&FeedbackDraft> {
        match &self.state {
            AnalysisState::Success(outcome) => Some(&outcome.draft),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AnalysisState::Failure { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.is_busy()
    }

    /// The form accepts edits and submissions in `Idle` and `Failure`.
    ///
    /// `Submitting` with no request outstanding means the submitting future
    /// was dropped; the form is usable again.
    pub fn is_editable(&self) -> bool {
        match self.state {
            AnalysisState::Idle | AnalysisState::Failure { .. } => true,
            AnalysisState::Submitting { .. } => !self.dispatcher.is_busy(),
            AnalysisState::Success(_) => false,
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        self.ensure_editable()?;
        match self.form.select_file(file) {
            Ok(()) => Ok(()),
            Err(rejection) => Err(self.reject(rejection)),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        match self.form.set_text(text) {
            Ok(()) => Ok(()),
            Err(rejection) => Err(self.reject(rejection)),
        }
    }

    pub fn clear_file(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.form.clear_file();
        Ok(())
    }

    pub fn clear_form(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.form.clear();
        Ok(())
    }

    /// Validate the form and run one classification request.
    ///
    /// On success the form is cleared and a history record is added; a
    /// failed history write is logged and does not undo the success. On
    /// failure the form keeps its content.
    pub async fn submit(&mut self) -> Result<AnalysisResult> {
        if self.dispatcher.is_busy() {
            return Err(TriageError::Busy);
        }
        if matches!(self.state, AnalysisState::Success(_)) {
            return Err(TriageError::InvalidState(
                "Start a new analysis before submitting again".to_string(),
            ));
        }

        self.state = AnalysisState::Idle;
        let input = match self.form.submission() {
            Ok(input) => input,
            Err(rejection) => return Err(self.reject(rejection)),
        };

        self.state = AnalysisState::Submitting { mode: input.mode() };
        match self.dispatcher.dispatch(input).await {
            Ok(result) => {
                if let Err(err) = self.history.add(HistoryRecord::from(&result)) {
                    error!(analysis_id = %result.id, error = %err, "Failed to record analysis in history");
                }
                self.form.clear();
                self.state = AnalysisState::Success(Box::new(AnalysisOutcome {
                    draft: FeedbackDraft::new(result.suggested_reply.as_str()),
                    result: result.clone(),
                }));
                Ok(result)
            }
            Err(err) => {
                self.state = AnalysisState::Failure { message: err.to_string() };
                Err(err)
            }
        }
    }

    /// Return to `Idle`, discarding the current result or error.
    ///
    /// The form is left as is; after a success it is already empty.
    pub fn start_new_analysis(&mut self) {
        debug!(from = self.state.label(), "Starting new analysis");
        self.state = AnalysisState::Idle;
    }

    pub fn edit_reply(&mut self, reply: impl Into<String>) -> Result<()> {
        self.outcome_mut()?.draft.edit(reply);
        Ok(())
    }

    pub fn restore_reply(&mut self) -> Result<()> {
        self.outcome_mut()?.draft.restore();
        Ok(())
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        self.outcome_mut()?.draft.set_rating(rating)
    }

    /// Feedback payload for the current result. Does not change state.
    pub fn feedback_submission(&self) -> Result<FeedbackSubmission> {
        match &self.state {
            AnalysisState::Success(outcome) => {
                Ok(outcome.draft.to_submission(outcome.result.id.as_str()))
            }
            _ => Err(no_result()),
        }
    }

    fn outcome_mut(&mut self) -> Result<&mut AnalysisOutcome> {
        match &mut self.state {
            AnalysisState::Success(outcome) => Ok(outcome.as_mut()),
            _ => Err(no_result()),
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_editable() {
            Ok(())
        } else if self.dispatcher.is_busy() {
            Err(TriageError::Busy)
        } else {
            Err(TriageError::InvalidState(
                "The form is closed while a result is shown; start a new analysis".to_string(),
            ))
        }
    }

    fn reject(&mut self, rejection: InputRejection) -> TriageError {
        debug!(reason = %rejection, "Input rejected");
        self.state = AnalysisState::Failure { message: rejection.to_string() };
        TriageError::Rejected(rejection)
    }
}

fn no_result() -> TriageError {
    TriageError::InvalidState("No analysis result is shown".to_string())
}
