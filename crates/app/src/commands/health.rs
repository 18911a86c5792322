//! Service health check

use mailtriage_core::probe_health;
use mailtriage_domain::HealthSnapshot;

use crate::context::AppContext;

/// Probe the classification service once; `None` when unreachable.
pub async fn check_health(ctx: &AppContext) -> Option<HealthSnapshot> {
    probe_health(ctx.client.as_ref()).await
}
