//! Login command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use brewlog_core::OwnerId;

use crate::output;
use crate::session::CliSession;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Owner identity to act as
    #[arg(long)]
    pub owner: String,

    /// Store directory (defaults to the user data directory)
    #[arg(long, env = "BREWLOG_STORE")]
    pub store: Option<PathBuf>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let owner = OwnerId::new(&args.owner).context("Invalid owner")?;
    let store = match args.store {
        Some(path) => path,
        None => {
            let path = storage::default_store_dir()?;
            info!(store = %path.display(), "Using default store");
            path
        }
    };

    let session = CliSession::new(owner, store);
    storage::save_session(&session).context("Failed to save session")?;

    output::field("Owner", session.owner().as_str());
    output::field("Store", &session.store().display().to_string());
    output::success("Logged in successfully");

    Ok(())
}
