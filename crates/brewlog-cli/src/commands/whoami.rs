//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = storage::require_session()?;

    output::field("Owner", session.owner().as_str());
    output::field("Store", &session.store().display().to_string());

    Ok(())
}
