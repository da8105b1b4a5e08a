//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use brewlog_core::RecordId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: RecordId,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let session = storage::require_session()?;

    let removed = session
        .access()
        .delete(session.owner(), &args.id)
        .await
        .context("Failed to delete record")?;

    if removed {
        output::success(&format!("Deleted record {}", args.id));
    } else {
        warn!(id = %args.id, "Record was removed by another writer before delete");
        output::notice("Record was already gone.");
    }

    Ok(())
}
