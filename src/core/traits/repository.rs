use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::core::Result;

/// A record the store can hold: identified by a generated string id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in not-found errors and logs
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;

    fn assign_id(&mut self, id: String);

    /// Called by the store whenever the entity is written
    fn touch(&mut self, _now: NaiveDateTime) {}
}

/// Base repository trait for the record store
/// All record collections are accessed through this trait so services never
/// depend on the storage mechanism
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity; it receives a fresh id and is prepended to the collection
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Replace an existing entity in place
    async fn update(&self, id: &str, entity: T) -> Result<T>;

    /// Replace by id when present, otherwise append under a fresh id
    async fn upsert(&self, entity: T) -> Result<T>;

    /// List all entities, newest first
    async fn list(&self) -> Result<Vec<T>>;
}
