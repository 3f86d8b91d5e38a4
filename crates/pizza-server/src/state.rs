use pizza_core::{
    AUTHORIZATION, AppError, CollectionResource, DocumentStore, MemoryStore, NanoIdGenerator,
    ORDERS, Record,
};
use pizza_db::FileStore;

/// Storage backends the server can run on.
#[derive(Clone)]
pub enum Backend {
    File(FileStore),
    Memory(MemoryStore),
}

impl DocumentStore for Backend {
    async fn list_collection(&self, collection: &str) -> Result<Vec<Record>, AppError> {
        match self {
            Backend::File(store) => store.list_collection(collection).await,
            Backend::Memory(store) => store.list_collection(collection).await,
        }
    }

    async fn append_record(&self, collection: &str, record: Record) -> Result<(), AppError> {
        match self {
            Backend::File(store) => store.append_record(collection, record).await,
            Backend::Memory(store) => store.append_record(collection, record).await,
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        match self {
            Backend::File(store) => store.health_check().await,
            Backend::Memory(store) => store.health_check().await,
        }
    }
}

impl From<FileStore> for Backend {
    fn from(store: FileStore) -> Self {
        Backend::File(store)
    }
}

impl From<MemoryStore> for Backend {
    fn from(store: MemoryStore) -> Self {
        Backend::Memory(store)
    }
}

pub type Resource = CollectionResource<Backend, NanoIdGenerator>;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub store: Backend,
    pub authorization: Resource,
    pub orders: Resource,
}

impl AppState {
    /// Wire both resources onto one shared store.
    pub fn new(store: impl Into<Backend>) -> Self {
        let store = store.into();
        let ids = NanoIdGenerator::new();
        Self {
            authorization: CollectionResource::new(AUTHORIZATION, store.clone(), ids),
            orders: CollectionResource::new(ORDERS, store.clone(), ids),
            store,
        }
    }
}
