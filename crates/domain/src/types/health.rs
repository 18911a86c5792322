//! Service health as reported by `GET /health`

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Overall service state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum HealthState {
    Healthy,
    Degraded,
    /// Reported status was not one the client knows
    Unknown,
}

impl_domain_status_conversions!(HealthState {
    Healthy => "healthy",
    Degraded => "degraded",
    Unknown => "unknown",
});

/// Raw `/health` body. Every field is defaulted so older or newer services
/// still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub openai_configured: bool,
    pub database_connected: bool,
}

/// What the client surfaces about service health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HealthSnapshot {
    pub status: HealthState,
    pub openai_configured: bool,
}

impl From<HealthReport> for HealthSnapshot {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status.parse().unwrap_or(HealthState::Unknown),
            openai_configured: report.openai_configured,
        }
    }
}
