use std::path::{Path, PathBuf};
use std::sync::Arc;

use pizza_core::error::AppError;
use pizza_core::models::{DEFAULT_COLLECTIONS, Record};
use pizza_core::traits::DocumentStore;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::config::StoreConfig;

/// Whole-file document: collection name -> array of records.
type Document = Map<String, Value>;

/// [`DocumentStore`] backed by a single pretty-printed JSON file.
///
/// The document is held in memory and rewritten in full on every append.
/// Appends within one process are serialized; nothing coordinates with
/// other processes writing the same file.
#[derive(Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    document: Mutex<Document>,
}

impl FileStore {
    /// Open the store at the configured path, creating it if needed.
    pub async fn open(config: &StoreConfig) -> Result<Self, AppError> {
        Self::open_path(&config.path).await
    }

    /// Open (or create) the document file at `path`.
    ///
    /// A missing or empty file starts with the default collections; an existing
    /// file gains any default collection it lacks.
    pub async fn open_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let (mut document, mut dirty) = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => (Document::new(), true),
            Ok(bytes) => (parse_document(&path, &bytes)?, false),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Document::new(), true),
            Err(e) => {
                return Err(AppError::StoreError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        for name in DEFAULT_COLLECTIONS {
            if !document.contains_key(name) {
                document.insert(name.to_string(), Value::Array(Vec::new()));
                dirty = true;
            }
        }

        if dirty {
            write_document(&path, &document).await?;
        }

        tracing::info!(
            path = %path.display(),
            collections = document.len(),
            "Opened document store"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                document: Mutex::new(document),
            }),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}

impl DocumentStore for FileStore {
    async fn list_collection(&self, collection: &str) -> Result<Vec<Record>, AppError> {
        let document = self.inner.document.lock().await;
        let Some(value) = document.get(collection) else {
            return Ok(Vec::new());
        };

        let entries = value.as_array().ok_or_else(|| {
            AppError::StoreError(format!("Collection '{collection}' is not an array"))
        })?;

        entries
            .iter()
            .map(|entry| {
                entry.as_object().cloned().ok_or_else(|| {
                    AppError::StoreError(format!(
                        "Collection '{collection}' holds a non-object entry"
                    ))
                })
            })
            .collect()
    }

    async fn append_record(&self, collection: &str, record: Record) -> Result<(), AppError> {
        let mut document = self.inner.document.lock().await;
        let created = !document.contains_key(collection);

        let entries = document
            .entry(collection.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| {
                AppError::StoreError(format!("Collection '{collection}' is not an array"))
            })?;
        entries.push(Value::Object(record));

        if let Err(e) = write_document(&self.inner.path, &document).await {
            // Keep memory in line with what is on disk.
            if created {
                document.shift_remove(collection);
            } else if let Some(entries) =
                document.get_mut(collection).and_then(Value::as_array_mut)
            {
                entries.pop();
            }
            return Err(e);
        }

        tracing::debug!(collection, path = %self.inner.path.display(), "Persisted record");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        tokio::fs::metadata(&self.inner.path)
            .await
            .map(|_| ())
            .map_err(|e| {
                AppError::StoreError(format!("{} unavailable: {e}", self.inner.path.display()))
            })
    }
}

fn parse_document(path: &Path, bytes: &[u8]) -> Result<Document, AppError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(document) => Ok(document),
        _ => Err(AppError::StoreError(format!(
            "{} does not hold a JSON object",
            path.display()
        ))),
    }
}

/// Write to a sibling temp file, then rename over the target.
async fn write_document(path: &Path, document: &Document) -> Result<(), AppError> {
    let body = serde_json::to_vec_pretty(document)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, body)
        .await
        .map_err(|e| AppError::StoreError(format!("Failed to write {}: {e}", tmp.display())))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| AppError::StoreError(format!("Failed to replace {}: {e}", path.display())))?;

    Ok(())
}
