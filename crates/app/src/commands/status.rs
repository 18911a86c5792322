use mailtriage_core::lookup_status;
use mailtriage_domain::{Result, StatusReport};

use crate::context::AppContext;

pub async fn fetch_status(ctx: &AppContext, analysis_id: &str) -> Result<StatusReport> {
    lookup_status(ctx.client.as_ref(), analysis_id).await
}
