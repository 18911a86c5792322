use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::analysis::Category;

/// Body of `POST /api/feedback`.
///
/// Optional fields are left out of the JSON entirely when unset; the service
/// treats a missing `edited_reply` as "reply accepted unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct FeedbackSubmission {
    pub analysis_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_reply: Option<String>,
    /// 1..=5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Category the user believes is correct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl FeedbackSubmission {
    pub fn new(analysis_id: impl Into<String>) -> Self {
        Self { analysis_id: analysis_id.into(), ..Self::default() }
    }
}
