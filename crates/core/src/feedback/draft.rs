use mailtriage_domain::constants::{MAX_RATING, MIN_RATING};
use mailtriage_domain::{FeedbackSubmission, Result, TriageError};

/// Locally edited copy of a suggested reply plus the user's rating.
///
/// The original reply is never modified and is what edits are compared
/// against when building a [`FeedbackSubmission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    original_reply: String,
    edited_reply: String,
    rating: Option<u8>,
}

impl FeedbackDraft {
    pub fn new(original_reply: impl Into<String>) -> Self {
        let original_reply = original_reply.into();
        Self { edited_reply: original_reply.clone(), original_reply, rating: None }
    }

    pub fn original_reply(&self) -> &str {
        &self.original_reply
    }

    /// Reply as currently shown to the user
    pub fn reply(&self) -> &str {
        &self.edited_reply
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn edit(&mut self, reply: impl Into<String>) {
        self.edited_reply = reply.into();
    }

    /// Discard edits and show the original reply again
    pub fn restore(&mut self) {
        self.edited_reply.clone_from(&self.original_reply);
    }

    pub fn is_edited(&self) -> bool {
        self.edited_reply != self.original_reply
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(TriageError::InvalidInput(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        self.rating = Some(rating);
        Ok(())
    }

    /// Build the feedback payload for `analysis_id`.
    ///
    /// `edited_reply` is only set when the reply differs from the original.
    pub fn to_submission(&self, analysis_id: impl Into<String>) -> FeedbackSubmission {
        FeedbackSubmission {
            edited_reply: self.is_edited().then(|| self.edited_reply.clone()),
            rating: self.rating,
            ..FeedbackSubmission::new(analysis_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unedited_reply_is_not_sent() {
        let mut draft = FeedbackDraft::new("Thanks, will do.");
        draft.set_rating(5).unwrap();

        let submission = draft.to_submission("abc");

        assert_eq!(submission.edited_reply, None);
        assert_eq!(submission.rating, Some(5));
    }

    #[test]
    fn edit_then_restore_round_trips_to_original() {
        let mut draft = FeedbackDraft::new("Original");
        draft.edit("Changed");
        assert!(draft.is_edited());
        assert_eq!(draft.to_submission("x").edited_reply.as_deref(), Some("Changed"));

        draft.restore();
        assert!(!draft.is_edited());
        assert_eq!(draft.reply(), "Original");
    }

    #[test]
    fn editing_back_to_original_counts_as_unedited() {
        let mut draft = FeedbackDraft::new("Same");
        draft.edit("Same");
        assert!(draft.to_submission("x").edited_reply.is_none());
    }

    #[test]
    fn rating_outside_range_is_rejected() {
        let mut draft = FeedbackDraft::new("r");
        assert!(draft.set_rating(0).is_err());
        assert!(draft.set_rating(6).is_err());
        assert_eq!(draft.rating(), None);
    }
}
