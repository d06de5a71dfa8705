use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_config::KeyStrategy;
use shared_models::{EntityId, Record, RepositoryError, Stored};

use crate::repository::Repository;

#[derive(Debug, Default)]
struct Collection {
    next_id: i64,
    rows: Vec<(EntityId, Value)>,
}

impl Collection {
    fn next_key(&mut self, strategy: KeyStrategy) -> EntityId {
        match strategy {
            KeyStrategy::Sequential => {
                self.next_id += 1;
                EntityId::from(self.next_id)
            }
            KeyStrategy::Generated => EntityId::new(Uuid::new_v4().to_string()),
        }
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.rows.iter().position(|(key, _)| key == id)
    }

    /// Behaves like a unique index: nulls never collide, the row being
    /// rewritten never collides with itself.
    fn check_unique(
        &self,
        collection: &str,
        fields: &[&str],
        doc: &Value,
        skip: Option<&EntityId>,
    ) -> Result<(), RepositoryError> {
        for field in fields {
            let value = match doc.get(*field) {
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };

            let taken = self
                .rows
                .iter()
                .filter(|(key, _)| Some(key) != skip)
                .any(|(_, row)| row.get(*field) == Some(value));

            if taken {
                return Err(RepositoryError::Constraint(format!(
                    "duplicate value {} for unique field {}.{}",
                    value, collection, field
                )));
            }
        }
        Ok(())
    }
}

/// Process-local store shared by every repository created from it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    strategy: KeyStrategy,
    collections: Arc<RwLock<HashMap<&'static str, Collection>>>,
}

impl MemoryStore {
    pub fn new(strategy: KeyStrategy) -> Self {
        Self {
            strategy,
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn strategy(&self) -> KeyStrategy {
        self.strategy
    }
}

pub struct MemoryRepository<T> {
    store: MemoryStore,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn decode(id: &EntityId, doc: &Value) -> Result<Stored<T>, RepositoryError> {
        Ok(Stored::new(id.clone(), serde_json::from_value(doc.clone())?))
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn create(&self, record: T) -> Result<Stored<T>, RepositoryError> {
        let doc = serde_json::to_value(&record)?;

        let mut collections = self.store.collections.write().await;
        let collection = collections.entry(T::COLLECTION).or_default();
        collection.check_unique(T::COLLECTION, T::UNIQUE_FIELDS, &doc, None)?;

        let id = collection.next_key(self.store.strategy);
        collection.rows.push((id.clone(), doc));
        debug!("Stored {} record in memory with ID: {}", T::COLLECTION, id);

        Ok(Stored::new(id, record))
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Stored<T>>, RepositoryError> {
        let collections = self.store.collections.read().await;

        collections
            .get(T::COLLECTION)
            .and_then(|collection| collection.position(id).map(|i| &collection.rows[i]))
            .map(|(key, doc)| Self::decode(key, doc))
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Stored<T>>, RepositoryError> {
        let collections = self.store.collections.read().await;

        match collections.get(T::COLLECTION) {
            Some(collection) => collection
                .rows
                .iter()
                .map(|(key, doc)| Self::decode(key, doc))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    async fn update(&self, id: &EntityId, record: T) -> Result<Option<Stored<T>>, RepositoryError> {
        let doc = serde_json::to_value(&record)?;

        let mut collections = self.store.collections.write().await;
        let Some(collection) = collections.get_mut(T::COLLECTION) else {
            return Ok(None);
        };
        let Some(index) = collection.position(id) else {
            return Ok(None);
        };

        collection.check_unique(T::COLLECTION, T::UNIQUE_FIELDS, &doc, Some(id))?;
        collection.rows[index].1 = doc;
        debug!("Updated {} record in memory: {}", T::COLLECTION, id);

        Ok(Some(Stored::new(id.clone(), record)))
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, RepositoryError> {
        let mut collections = self.store.collections.write().await;
        let Some(collection) = collections.get_mut(T::COLLECTION) else {
            return Ok(false);
        };

        match collection.position(id) {
            Some(index) => {
                collection.rows.remove(index);
                debug!("Deleted {} record from memory: {}", T::COLLECTION, id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
