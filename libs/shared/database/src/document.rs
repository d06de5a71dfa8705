use std::marker::PhantomData;

use async_trait::async_trait;
use deadpool_redis::{Connection, Pool};
use redis::{AsyncCommands, RedisError};
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use shared_models::{EntityId, Record, RepositoryError, Stored};

use crate::repository::Repository;

fn redis_error(err: RedisError) -> RepositoryError {
    error!("Redis error: {}", err);
    RepositoryError::Backend(err.to_string())
}

/// String form used in unique claim keys; `None` for values that never collide.
fn unique_value(doc: &Value, field: &str) -> Option<String> {
    match doc.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Repository storing each record as a JSON document in Redis.
///
/// Layout under `{prefix}:{collection}`:
/// - `:{uuid}` the document body
/// - `:ids` set of every live id
/// - `:unique:{field}:{value}` claim key holding the owning id, one per unique field
pub struct RedisDocumentRepository<T> {
    pool: Pool,
    prefix: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RedisDocumentRepository<T> {
    pub fn new(pool: Pool, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
            _record: PhantomData,
        }
    }

    async fn get_connection(&self) -> Result<Connection, RepositoryError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            RepositoryError::Backend(format!("Connection error: {}", e))
        })
    }

    fn doc_key(&self, id: &str) -> String {
        format!("{}:{}:{}", self.prefix, T::COLLECTION, id)
    }

    fn index_key(&self) -> String {
        format!("{}:{}:ids", self.prefix, T::COLLECTION)
    }

    fn claim_key(&self, field: &str, value: &str) -> String {
        format!("{}:{}:unique:{}:{}", self.prefix, T::COLLECTION, field, value)
    }

    async fn load(&self, conn: &mut Connection, id: &str) -> Result<Option<Value>, RepositoryError> {
        let raw: Option<String> = conn.get(self.doc_key(id)).await.map_err(redis_error)?;
        raw.map(|body| serde_json::from_str(&body).map_err(RepositoryError::from))
            .transpose()
    }

    /// Claims every unique value of `doc` for `id` and returns the keys newly won.
    /// Values already owned by `id` pass. On a lost claim, the claims made by this
    /// call are released again.
    async fn claim_unique(
        &self,
        conn: &mut Connection,
        id: &str,
        doc: &Value,
    ) -> Result<Vec<String>, RepositoryError> {
        let mut claimed = Vec::new();

        for field in T::UNIQUE_FIELDS {
            let Some(value) = unique_value(doc, field) else {
                continue;
            };
            let key = self.claim_key(field, &value);

            let won: bool = conn.set_nx(&key, id).await.map_err(redis_error)?;
            if won {
                claimed.push(key);
                continue;
            }

            let owner: Option<String> = conn.get(&key).await.map_err(redis_error)?;
            if owner.as_deref() == Some(id) {
                continue;
            }

            self.discard(conn, &claimed).await;
            return Err(RepositoryError::Constraint(format!(
                "duplicate value {} for unique field {}.{}",
                value,
                T::COLLECTION,
                field
            )));
        }

        Ok(claimed)
    }

    /// Best-effort removal of keys written by a failed operation. The caller's
    /// error is what gets reported, so a failure here is only logged.
    async fn discard(&self, conn: &mut Connection, keys: &[String]) {
        if keys.is_empty() {
            return;
        }
        let released: redis::RedisResult<()> = conn.del(keys).await;
        if let Err(e) = released {
            error!("Failed to roll back {} keys {:?}: {}", T::COLLECTION, keys, e);
        }
    }

    async fn write_new(&self, conn: &mut Connection, id: &str, doc: &Value) -> Result<(), RepositoryError> {
        let _: () = conn.set(self.doc_key(id), doc.to_string()).await.map_err(redis_error)?;
        let _: () = conn.sadd(self.index_key(), id).await.map_err(redis_error)?;
        Ok(())
    }

    /// Drops claims held by `old` whose value differs in `new` (or all of them when `new` is `None`).
    async fn release_unique(
        &self,
        conn: &mut Connection,
        old: &Value,
        new: Option<&Value>,
    ) -> Result<(), RepositoryError> {
        let stale: Vec<String> = T::UNIQUE_FIELDS
            .iter()
            .filter_map(|field| {
                let previous = unique_value(old, field)?;
                let current = new.and_then(|doc| unique_value(doc, field));
                (current.as_deref() != Some(previous.as_str())).then(|| self.claim_key(field, &previous))
            })
            .collect();

        if !stale.is_empty() {
            let _: () = conn.del(&stale).await.map_err(redis_error)?;
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Record> Repository<T> for RedisDocumentRepository<T> {
    async fn create(&self, record: T) -> Result<Stored<T>, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let doc = serde_json::to_value(&record)?;
        let mut conn = self.get_connection().await?;

        let mut written = self.claim_unique(&mut conn, &id, &doc).await?;

        if let Err(err) = self.write_new(&mut conn, &id, &doc).await {
            written.push(self.doc_key(&id));
            self.discard(&mut conn, &written).await;
            return Err(err);
        }
        debug!("Document created in {} with ID: {}", T::COLLECTION, id);

        Ok(Stored::new(EntityId::new(id), record))
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Stored<T>>, RepositoryError> {
        debug!("Fetching {} document: {}", T::COLLECTION, id);
        let mut conn = self.get_connection().await?;

        match self.load(&mut conn, id.as_str()).await? {
            Some(doc) => Ok(Some(Stored::new(id.clone(), serde_json::from_value(doc)?))),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Stored<T>>, RepositoryError> {
        debug!("Listing {} documents", T::COLLECTION);
        let mut conn = self.get_connection().await?;

        let mut ids: Vec<String> = conn.smembers(self.index_key()).await.map_err(redis_error)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        ids.sort();

        let keys: Vec<String> = ids.iter().map(|id| self.doc_key(id)).collect();
        let bodies: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;

        // A body can vanish between SMEMBERS and MGET under a concurrent delete.
        ids.into_iter()
            .zip(bodies)
            .filter_map(|(id, body)| body.map(|body| (id, body)))
            .map(|(id, body)| -> Result<Stored<T>, RepositoryError> {
                let record: T = serde_json::from_str(&body)?;
                Ok(Stored::new(EntityId::new(id), record))
            })
            .collect()
    }

    async fn update(&self, id: &EntityId, record: T) -> Result<Option<Stored<T>>, RepositoryError> {
        debug!("Updating {} document: {}", T::COLLECTION, id);
        let mut conn = self.get_connection().await?;

        let Some(previous) = self.load(&mut conn, id.as_str()).await? else {
            return Ok(None);
        };

        let doc = serde_json::to_value(&record)?;
        let claimed = self.claim_unique(&mut conn, id.as_str(), &doc).await?;

        let saved: Result<(), RepositoryError> = conn
            .set(self.doc_key(id.as_str()), doc.to_string())
            .await
            .map_err(redis_error);
        if let Err(err) = saved {
            self.discard(&mut conn, &claimed).await;
            return Err(err);
        }

        // Old values stay claimed until the new body is in place.
        self.release_unique(&mut conn, &previous, Some(&doc)).await?;

        Ok(Some(Stored::new(id.clone(), record)))
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting {} document: {}", T::COLLECTION, id);
        let mut conn = self.get_connection().await?;

        let Some(previous) = self.load(&mut conn, id.as_str()).await? else {
            return Ok(false);
        };

        let _: () = conn.del(self.doc_key(id.as_str())).await.map_err(redis_error)?;
        let _: () = conn.srem(self.index_key(), id.as_str()).await.map_err(redis_error)?;
        self.release_unique(&mut conn, &previous, None).await?;

        Ok(true)
    }
}
