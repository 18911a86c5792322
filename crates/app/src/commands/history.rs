//! Local history management

use mailtriage_domain::{HistoryRecord, Result};
use tracing::info;

use crate::context::AppContext;

/// Records newest first; a corrupt store lists as empty.
pub fn list_history(ctx: &AppContext) -> Vec<HistoryRecord> {
    ctx.history.list()
}

/// Remove the record with `id`; `Ok(false)` when there was none.
pub fn remove_history_entry(ctx: &AppContext, id: &str) -> Result<bool> {
    let removed = ctx.history.remove_by_id(id.trim())?;
    info!(id, removed, "History entry removal");
    Ok(removed)
}

pub fn clear_history(ctx: &AppContext) -> Result<()> {
    ctx.history.clear()?;
    info!("History cleared");
    Ok(())
}
