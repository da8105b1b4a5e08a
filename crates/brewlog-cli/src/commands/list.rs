//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brewlog_core::SortKey;

use crate::output::{self, RecordFormat};
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort key (orderDate or overallTasteRating), descending
    #[arg(long, default_value = "orderDate")]
    pub sort: SortKey,

    /// Only show records with exactly this brand name
    #[arg(long)]
    pub brand: Option<String>,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = storage::require_session()?;
    let access = session.access();

    let records = access
        .list(session.owner(), args.sort, args.brand.as_deref())
        .await
        .context("Failed to list records")?;

    if records.is_empty() {
        output::notice("No records found.");
        return Ok(());
    }

    let format = RecordFormat::from_pretty(args.pretty);
    for record in &records {
        output::record(record, format)?;
    }

    Ok(())
}
