//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! Mocks use `Arc<Mutex<_>>` for interior mutability so clones share state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::id::IdGenerator;
use crate::memory::MemoryStore;
use crate::models::Record;
use crate::traits::DocumentStore;

// ---------------------------------------------------------------------------
// SequentialIds
// ---------------------------------------------------------------------------

/// Deterministic ids: `id000001`, `id000002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: Arc<AtomicU64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id{n:06}")
    }
}

// ---------------------------------------------------------------------------
// FailingStore
// ---------------------------------------------------------------------------

/// Store that fails a chosen operation once, then behaves like a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct FailingStore {
    inner: MemoryStore,
    list_error: Arc<Mutex<Option<AppError>>>,
    append_error: Arc<Mutex<Option<AppError>>>,
}

impl FailingStore {
    /// The next `append_record` call returns `error`.
    pub fn on_append(error: AppError) -> Self {
        Self {
            inner: MemoryStore::new(),
            list_error: Arc::new(Mutex::new(None)),
            append_error: Arc::new(Mutex::new(Some(error))),
        }
    }

    /// The next `list_collection` call returns `error`.
    pub fn on_list(error: AppError) -> Self {
        Self {
            inner: MemoryStore::new(),
            list_error: Arc::new(Mutex::new(Some(error))),
            append_error: Arc::new(Mutex::new(None)),
        }
    }

    fn take(slot: &Mutex<Option<AppError>>) -> Option<AppError> {
        slot.lock().unwrap().take()
    }
}

impl DocumentStore for FailingStore {
    async fn list_collection(&self, collection: &str) -> Result<Vec<Record>, AppError> {
        if let Some(err) = Self::take(&self.list_error) {
            return Err(err);
        }
        self.inner.list_collection(collection).await
    }

    async fn append_record(&self, collection: &str, record: Record) -> Result<(), AppError> {
        if let Some(err) = Self::take(&self.append_error) {
            return Err(err);
        }
        self.inner.append_record(collection, record).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
