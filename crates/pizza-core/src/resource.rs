use serde_json::Value;

use crate::error::AppError;
use crate::id::IdGenerator;
use crate::models::{Record, ResourceSpec};
use crate::traits::DocumentStore;

/// List/create operations over one named collection.
///
/// Generic over the store and id generator so the same code serves every
/// resource and can be driven by mocks in tests.
#[derive(Debug, Clone)]
pub struct CollectionResource<S, G>
where
    S: DocumentStore,
    G: IdGenerator,
{
    spec: ResourceSpec,
    store: S,
    ids: G,
}

impl<S, G> CollectionResource<S, G>
where
    S: DocumentStore,
    G: IdGenerator,
{
    pub fn new(spec: ResourceSpec, store: S, ids: G) -> Self {
        Self { spec, store, ids }
    }

    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Every record of the collection, oldest first.
    pub async fn list(&self) -> Result<Vec<Record>, AppError> {
        let records = self.store.list_collection(self.spec.collection).await?;
        tracing::debug!(
            collection = self.spec.collection,
            count = records.len(),
            "Listed records"
        );
        Ok(records)
    }

    /// Stamp a fresh id onto the recognized payload fields, persist, and return the record.
    pub async fn create(&self, payload: &Value) -> Result<Record, AppError> {
        let record = self.spec.assemble(self.ids.generate(), payload)?;

        self.store
            .append_record(self.spec.collection, record.clone())
            .await?;

        let id = record.get("id").and_then(Value::as_str).unwrap_or_default();
        tracing::debug!(collection = self.spec.collection, id, "Created record");
        Ok(record)
    }
}
