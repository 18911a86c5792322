//! Status lookup - server-side state of a past analysis

use mailtriage_domain::constants::STATUS_FALLBACK;
use mailtriage_domain::{Result, StatusReport, TriageError};
use tracing::{debug, warn};

use super::ports::StatusLookup;

/// Fetch the server-side status of a past analysis.
pub async fn lookup_status(lookup: &dyn StatusLookup, analysis_id: &str) -> Result<StatusReport> {
    let analysis_id = analysis_id.trim();
    if analysis_id.is_empty() {
        return Err(TriageError::InvalidInput("analysis id cannot be empty".to_string()));
    }

    match lookup.status(analysis_id).await {
        Ok(report) => {
            debug!(analysis_id, status = %report.status, "Fetched analysis status");
            Ok(report)
        }
        Err(err) => {
            warn!(analysis_id, error = %err, "Status lookup failed");
            Err(err.into_triage(STATUS_FALLBACK))
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mailtriage_domain::{AnalysisStatus, TransportError};

    use super::*;

    struct Fixed(std::result::Result<StatusReport, TransportError>);

    #[async_trait]
    impl StatusLookup for Fixed {
        async fn status(&self, _id: &str) -> std::result::Result<StatusReport, TransportError> {
            self.0.clone()
        }
    }

    fn processing(id: &str) -> StatusReport {
        StatusReport {
            id: id.to_string(),
            status: AnalysisStatus::Processing,
            category: None,
            confidence: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn returns_report() {
        let report = lookup_status(&Fixed(Ok(processing("abc"))), " abc ").await.unwrap();
        assert_eq!(report.status, AnalysisStatus::Processing);
    }

    #[tokio::test]
    async fn blank_id_is_rejected_before_lookup() {
        let err = lookup_status(&Fixed(Ok(processing("abc"))), "  ").await.unwrap_err();
        assert!(matches!(err, TriageError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn failure_without_detail_uses_fallback() {
        let lookup = Fixed(Err(TransportError::Status { status: 500, detail: None }));
        let err = lookup_status(&lookup, "abc").await.unwrap_err();
        assert_eq!(err, TriageError::Transport("Failed to fetch status".to_string()));
    }
}
