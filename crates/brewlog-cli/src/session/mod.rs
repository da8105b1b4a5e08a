//! The persisted caller identity.
//!
//! Authentication is out of scope; `brewlog login` simply records which
//! owner subsequent commands act as and where the store lives.

pub mod storage;

use std::path::{Path, PathBuf};

use brewlog_access::RecordAccess;
use brewlog_core::OwnerId;
use brewlog_file::FileStore;

/// The active owner and store location.
#[derive(Debug, Clone)]
pub struct CliSession {
    owner: OwnerId,
    store: PathBuf,
}

impl CliSession {
    pub fn new(owner: OwnerId, store: PathBuf) -> Self {
        Self { owner, store }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn store(&self) -> &Path {
        &self.store
    }

    /// Open the record access layer over this session's store.
    pub fn access(&self) -> RecordAccess<FileStore> {
        RecordAccess::new(FileStore::new(&self.store))
    }
}
