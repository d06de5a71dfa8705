use async_trait::async_trait;

use shared_models::{EntityId, Record, RepositoryError, Stored};

/// Storage contract for one entity type.
///
/// Every backend implements the same five operations; services hold an
/// `Arc<dyn Repository<T>>` and never learn which store sits behind it.
/// Implementations add no locking of their own and lean on the store's
/// native concurrency control.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Insert a new record; the store assigns the identifier.
    async fn create(&self, record: T) -> Result<Stored<T>, RepositoryError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Stored<T>>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Stored<T>>, RepositoryError>;

    /// Replace every business field of an existing record. `None` if `id` is unknown.
    async fn update(&self, id: &EntityId, record: T) -> Result<Option<Stored<T>>, RepositoryError>;

    /// `false` if `id` is unknown.
    async fn delete(&self, id: &EntityId) -> Result<bool, RepositoryError>;
}
