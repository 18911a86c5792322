//! Best-effort service health check

use mailtriage_domain::HealthSnapshot;
use tracing::{debug, warn};

use crate::analysis::ports::HealthProbe;

/// Query service health once.
///
/// Never fails: any transport or decode problem yields `None`.
pub async fn probe_health(probe: &dyn HealthProbe) -> Option<HealthSnapshot> {
    match probe.check_health().await {
        Ok(report) => {
            debug!(status = %report.status, version = %report.version, "Health check succeeded");
            Some(HealthSnapshot::from(report))
        }
        Err(err) => {
            warn!(error = %err, "Health check failed");
            None
        }
    }
}
