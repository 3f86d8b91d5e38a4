pub mod error;
pub mod id;
pub mod memory;
pub mod models;
pub mod resource;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use id::{ID_LENGTH, IdGenerator, NanoIdGenerator};
pub use memory::MemoryStore;
pub use models::{AUTHORIZATION, DEFAULT_COLLECTIONS, ORDERS, Record, ResourceSpec};
pub use resource::CollectionResource;
pub use traits::DocumentStore;
