//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brewlog_core::RecordId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: RecordId,

    /// JSON file with the full replacement record (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let session = storage::require_session()?;
    let input = super::read_input(&args.json)?;

    let record = session
        .access()
        .update(session.owner(), &args.id, &input)
        .await
        .context("Failed to update record")?;

    output::written(&record.id, "Updated");

    Ok(())
}
