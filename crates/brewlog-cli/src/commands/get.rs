//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brewlog_core::RecordId;

use crate::output::{self, RecordFormat};
use crate::session::storage;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: RecordId,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let session = storage::require_session()?;

    let record = session
        .access()
        .get(session.owner(), &args.id)
        .await
        .context("Failed to get record")?;

    output::record(&record, RecordFormat::Pretty)
}
