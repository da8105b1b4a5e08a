//! Session storage for persisting the active owner.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use brewlog_core::OwnerId;

use super::CliSession;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    owner: String,
    store: PathBuf,
}

/// Get the data directory, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "brewlog").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.to_path_buf())
}

/// Default store location when none is given at login.
pub fn default_store_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("store"))
}

fn session_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("session.json"))
}

/// Save a session to disk.
pub fn save_session(session: &CliSession) -> Result<()> {
    let stored = StoredSession {
        owner: session.owner().to_string(),
        store: session.store().to_path_buf(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub fn load_session() -> Result<Option<CliSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;
    let owner = OwnerId::new(stored.owner).context("Invalid owner in session")?;

    Ok(Some(CliSession::new(owner, stored.store)))
}

/// Load the session or fail with a hint to log in.
pub fn require_session() -> Result<CliSession> {
    load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'brewlog login' first.")
}

/// Clear the stored session. Returns whether one existed.
pub fn clear_session() -> Result<bool> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove session file")?;
    Ok(true)
}
