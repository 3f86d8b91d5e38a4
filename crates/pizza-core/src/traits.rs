use std::future::Future;

use crate::error::AppError;
use crate::models::Record;

/// Collection-of-records storage shared by every resource handler.
pub trait DocumentStore: Send + Sync + Clone {
    /// All records of a collection in insertion order. Unknown collections are empty.
    fn list_collection(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Record>, AppError>> + Send;

    /// Append a record and persist it before returning.
    fn append_record(
        &self,
        collection: &str,
        record: Record,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Verify the backing storage is reachable.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
