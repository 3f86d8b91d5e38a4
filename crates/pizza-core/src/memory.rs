use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{DEFAULT_COLLECTIONS, Record};
use crate::traits::DocumentStore;

/// In-process [`DocumentStore`]. Nothing survives a restart.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl MemoryStore {
    /// Create a store holding the default (empty) collections.
    pub fn new() -> Self {
        let collections = DEFAULT_COLLECTIONS
            .iter()
            .map(|name| ((*name).to_string(), Vec::new()))
            .collect();
        Self {
            collections: Arc::new(RwLock::new(collections)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    async fn list_collection(&self, collection: &str) -> Result<Vec<Record>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn append_record(&self, collection: &str, record: Record) -> Result<(), AppError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
