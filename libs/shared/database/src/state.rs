use std::sync::Arc;

use anyhow::{anyhow, Result};
use deadpool_redis::{Config, Pool, Runtime};
use tracing::info;

use shared_config::{AppConfig, KeyStrategy, StorageBackend};
use shared_models::Record;

use crate::document::RedisDocumentRepository;
use crate::memory::{MemoryRepository, MemoryStore};
use crate::relational::RelationalRepository;
use crate::repository::Repository;
use crate::supabase::SupabaseClient;

/// Connected storage backend, picked once at startup and cloned into every router.
#[derive(Clone)]
pub enum Database {
    Relational(SupabaseClient),
    Document { pool: Pool, prefix: String },
    Memory(MemoryStore),
}

impl Database {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let database = match config.storage_backend {
            StorageBackend::Relational => {
                if !config.is_configured() {
                    return Err(anyhow!(
                        "Relational storage needs SUPABASE_URL and SUPABASE_SERVICE_KEY"
                    ));
                }
                Database::Relational(SupabaseClient::new(config))
            }
            StorageBackend::Document => {
                let pool = Config::from_url(config.redis_url.clone())
                    .create_pool(Some(Runtime::Tokio1))
                    .map_err(|e| anyhow!("Failed to create Redis pool: {}", e))?;

                // Test connection
                let mut conn = pool
                    .get()
                    .await
                    .map_err(|e| anyhow!("Failed to connect to Redis: {}", e))?;
                let _: String = redis::cmd("PING").query_async(&mut conn).await?;

                Database::Document {
                    pool,
                    prefix: config.redis_key_prefix.clone(),
                }
            }
            StorageBackend::Memory => Database::memory(config.memory_key_strategy),
        };

        info!("Storage backend initialized: {}", database.backend());
        Ok(database)
    }

    pub fn memory(strategy: KeyStrategy) -> Self {
        Database::Memory(MemoryStore::new(strategy))
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            Database::Relational(_) => StorageBackend::Relational,
            Database::Document { .. } => StorageBackend::Document,
            Database::Memory(_) => StorageBackend::Memory,
        }
    }

    pub fn repository<T: Record>(&self) -> Arc<dyn Repository<T>> {
        match self {
            Database::Relational(client) => Arc::new(RelationalRepository::<T>::new(client.clone())),
            Database::Document { pool, prefix } => {
                Arc::new(RedisDocumentRepository::<T>::new(pool.clone(), prefix.clone()))
            }
            Database::Memory(store) => Arc::new(MemoryRepository::<T>::new(store.clone())),
        }
    }
}

/// Router state shared by every cell.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: Database,
}

impl AppState {
    pub fn new(config: AppConfig, database: Database) -> Self {
        Self {
            config: Arc::new(config),
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Shift {
        label: String,
    }

    impl Record for Shift {
        const COLLECTION: &'static str = "shift";
    }

    #[tokio::test]
    async fn test_memory_backend_from_config() {
        let database = Database::connect(&AppConfig::default()).await.unwrap();
        assert_eq!(database.backend(), StorageBackend::Memory);

        // Repositories from one handle share the same store.
        let writer = database.repository::<Shift>();
        let reader = database.repository::<Shift>();
        let stored = writer.create(Shift { label: "night".to_string() }).await.unwrap();

        assert_eq!(reader.find_by_id(&stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_relational_backend_requires_credentials() {
        let config = AppConfig {
            storage_backend: StorageBackend::Relational,
            ..AppConfig::default()
        };

        assert!(Database::connect(&config).await.is_err());

        let config = AppConfig {
            storage_backend: StorageBackend::Relational,
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "service-key".to_string(),
            ..AppConfig::default()
        };
        let database = Database::connect(&config).await.unwrap();
        assert_eq!(database.backend(), StorageBackend::Relational);
    }
}
