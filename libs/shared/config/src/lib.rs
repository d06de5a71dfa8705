use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown storage backend: {0} (expected relational, document or memory)")]
    UnknownBackend(String),

    #[error("Unknown memory key strategy: {0} (expected sequential or generated)")]
    UnknownKeyStrategy(String),

    #[error("Invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

/// Persistence backend behind every repository. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Supabase/PostgREST tables with integer identity keys.
    Relational,
    /// Redis documents under generated string keys.
    Document,
    /// Process-local store, nothing survives a restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relational" | "supabase" | "postgres" => Ok(Self::Relational),
            "document" | "redis" => Ok(Self::Document),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relational => write!(f, "relational"),
            Self::Document => write!(f, "document"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// How the in-memory backend hands out identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// 1, 2, 3... per collection, like an identity column.
    #[default]
    Sequential,
    /// Random UUID strings, like a document store.
    Generated,
}

impl FromStr for KeyStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "generated" | "uuid" => Ok(Self::Generated),
            other => Err(ConfigError::UnknownKeyStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub redis_url: String,
    pub redis_key_prefix: String,
    pub memory_key_strategy: KeyStrategy,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            supabase_url: String::new(),
            supabase_service_key: String::new(),
            redis_url: "redis://localhost:6379".to_string(),
            redis_key_prefix: "medilink".to_string(),
            memory_key_strategy: KeyStrategy::Sequential,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => {
                warn!("STORAGE_BACKEND not set, using in-memory storage");
                defaults.storage_backend
            }
        };

        let memory_key_strategy = match lookup("MEMORY_KEY_STRATEGY") {
            Some(value) => value.parse()?,
            None => defaults.memory_key_strategy,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.server_port,
        };

        let config = Self {
            storage_backend,
            supabase_url: lookup("SUPABASE_URL").unwrap_or_else(|| {
                if storage_backend == StorageBackend::Relational {
                    warn!("SUPABASE_URL not set, using empty value");
                }
                String::new()
            }),
            supabase_service_key: lookup("SUPABASE_SERVICE_KEY").unwrap_or_else(|| {
                if storage_backend == StorageBackend::Relational {
                    warn!("SUPABASE_SERVICE_KEY not set, using empty value");
                }
                String::new()
            }),
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| {
                if storage_backend == StorageBackend::Document {
                    warn!("REDIS_URL not set, using default");
                }
                defaults.redis_url.clone()
            }),
            redis_key_prefix: lookup("REDIS_KEY_PREFIX").unwrap_or(defaults.redis_key_prefix),
            memory_key_strategy,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
        };

        if !config.is_configured() {
            warn!(
                "Application not fully configured for the {} backend - missing environment variables",
                config.storage_backend
            );
        }

        Ok(config)
    }

    /// Whether the selected backend has everything it needs to connect.
    pub fn is_configured(&self) -> bool {
        match self.storage_backend {
            StorageBackend::Relational => {
                !self.supabase_url.is_empty() && !self.supabase_service_key.is_empty()
            }
            StorageBackend::Document => !self.redis_url.is_empty(),
            StorageBackend::Memory => true,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_memory_backend() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.memory_key_strategy, KeyStrategy::Sequential);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.is_configured());
    }

    #[test]
    fn test_relational_backend_requires_supabase() {
        let config = AppConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "relational")])).unwrap();
        assert!(!config.is_configured());

        let config = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "Relational"),
            ("SUPABASE_URL", "http://localhost:54321"),
            ("SUPABASE_SERVICE_KEY", "service-key"),
        ]))
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Relational);
        assert!(config.is_configured());
    }

    #[test]
    fn test_document_backend_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "document"),
            ("REDIS_KEY_PREFIX", "trial"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Document);
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.redis_key_prefix, "trial");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_rejects_unknown_values() {
        let result = AppConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "cassandra")]));
        assert!(matches!(result, Err(ConfigError::UnknownBackend(name)) if name == "cassandra"));

        let result = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

        let result = AppConfig::from_lookup(lookup_from(&[("MEMORY_KEY_STRATEGY", "random")]));
        assert!(matches!(result, Err(ConfigError::UnknownKeyStrategy(_))));
    }
}
