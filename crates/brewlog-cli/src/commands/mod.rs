//! Subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod login;
mod logout;
mod update;
mod whoami;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Subcommand;

use brewlog_core::RecordInput;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the owner subsequent commands act as
    Login(login::LoginArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Forget the active session
    Logout(logout::LogoutArgs),

    /// List your records
    List(list::ListArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// Log a new purchase
    Create(create::CreateArgs),

    /// Replace an existing record
    Update(update::UpdateArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: Command) -> Result<()> {
    match cmd {
        Command::Login(args) => login::run(args).await,
        Command::Whoami(args) => whoami::run(args).await,
        Command::Logout(args) => logout::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Get(args) => get::run(args).await,
        Command::Create(args) => create::run(args).await,
        Command::Update(args) => update::run(args).await,
        Command::Delete(args) => delete::run(args).await,
    }
}

/// Read a record payload from a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<RecordInput> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).context("Failed to read JSON file")?
    };

    serde_json::from_str(&content).context("Invalid record JSON")
}
