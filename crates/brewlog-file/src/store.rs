//! Filesystem storage for brewlog documents.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/documents/<id>.json   one pretty-printed JSON object per document
//! <root>/store.lock            advisory lock held for the duration of a write
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use brewlog_core::Result;
use brewlog_core::error::StoreError;
use brewlog_core::{Document, DocumentBody, DocumentStore, RecordId};

fn map_io(err: std::io::Error) -> StoreError {
    StoreError::from(err)
}

/// A [`DocumentStore`] keeping one JSON file per document.
///
/// Writes go to a temporary file that is renamed into place, so readers never
/// see a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    ///
    /// Directories are created lazily on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn documents_dir(&self) -> PathBuf {
        self.root.join("documents")
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    fn document_path(&self, id: &RecordId) -> PathBuf {
        self.documents_dir().join(format!("{}.json", id))
    }

    fn generate_id() -> Result<RecordId> {
        RecordId::new(Uuid::new_v4().simple().to_string())
    }

    /// Run `f` while holding the exclusive store lock.
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        fs::create_dir_all(self.documents_dir()).map_err(map_io)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(map_io)?;
        let result = f();
        FileExt::unlock(&lock_file).map_err(map_io)?;

        result
    }

    fn write_document(&self, path: &Path, body: &DocumentBody) -> Result<()> {
        let content = serde_json::to_string_pretty(body).map_err(|e| StoreError::Io {
            message: format!("Failed to encode document: {}", e),
        })?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        File::open(&temp_path)
            .and_then(|f| f.sync_all())
            .map_err(map_io)?;
        fs::rename(&temp_path, path).map_err(map_io)?;

        Ok(())
    }

    fn read_document(&self, id: &RecordId, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path).map_err(map_io)?;
        let body: DocumentBody =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        Ok(Document::new(id.clone(), body))
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn list_all(&self) -> Result<Vec<Document>> {
        let dir = self.documents_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<_> = fs::read_dir(&dir)
            .map_err(map_io)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        entries.sort_by_key(|e| e.file_name());

        let mut documents = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = entry.path();
            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| RecordId::new(s).ok())
            else {
                warn!(path = %path.display(), "Skipping document file with invalid id");
                continue;
            };

            match self.read_document(&id, &path) {
                Ok(doc) => documents.push(doc),
                Err(e) => warn!(%id, error = %e, "Skipping unreadable document file"),
            }
        }

        debug!(count = documents.len(), "Listed documents");
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Document>> {
        let path = self.document_path(id);
        if !path.exists() {
            return Ok(None);
        }

        self.read_document(id, &path).map(Some)
    }

    #[instrument(skip(self, body))]
    async fn insert(&self, body: &DocumentBody) -> Result<RecordId> {
        let id = Self::generate_id()?;
        let path = self.document_path(&id);

        self.with_write_lock(|| self.write_document(&path, body))?;

        debug!(%id, "Created document");
        Ok(id)
    }

    #[instrument(skip(self, body))]
    async fn replace(&self, id: &RecordId, body: &DocumentBody) -> Result<bool> {
        let path = self.document_path(id);

        let replaced = self.with_write_lock(|| {
            if !path.exists() {
                return Ok(false);
            }
            self.write_document(&path, body)?;
            Ok(true)
        })?;

        if replaced {
            debug!("Replaced document");
        }
        Ok(replaced)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &RecordId) -> Result<bool> {
        let path = self.document_path(id);

        let removed = self.with_write_lock(|| {
            if !path.exists() {
                return Ok(false);
            }
            fs::remove_file(&path).map_err(map_io)?;
            Ok(true)
        })?;

        if removed {
            debug!("Deleted document");
        }
        Ok(removed)
    }
}
