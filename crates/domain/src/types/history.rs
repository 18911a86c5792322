use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::analysis::{AnalysisResult, Category};

/// Compact summary of a past analysis kept in the local history.
///
/// Field names match the persisted JSON array, so records written by older
/// clients remain readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HistoryRecord {
    pub id: String,
    pub category: Category,
    pub confidence: f64,
    pub summary: String,
    pub timestamp: String,
}

impl HistoryRecord {
    /// Timestamp parsed as RFC 3339 or as a naive ISO-8601 datetime.
    ///
    /// Returns `None` when the stored value is in neither format; callers
    /// then display the raw string.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }

    /// `YYYY-MM-DD HH:MM` when the timestamp parses, the raw value otherwise
    pub fn display_timestamp(&self) -> String {
        self.parsed_timestamp()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }
}

impl From<&AnalysisResult> for HistoryRecord {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            id: result.id.clone(),
            category: result.category,
            confidence: result.confidence,
            summary: result.summary.clone(),
            timestamp: result.timestamp.clone(),
        }
    }
}
