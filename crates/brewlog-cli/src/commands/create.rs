//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// JSON file with the record (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let session = storage::require_session()?;
    let input = super::read_input(&args.json)?;

    let record = session
        .access()
        .create(session.owner(), &input)
        .await
        .context("Failed to create record")?;

    output::written(&record.id, "Created");

    Ok(())
}
