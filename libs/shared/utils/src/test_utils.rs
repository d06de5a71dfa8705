use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use shared_config::{AppConfig, KeyStrategy, StorageBackend};
use shared_database::columns::to_columns;
use shared_database::{AppState, Database};
use shared_models::UserFields;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub key_strategy: KeyStrategy,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "test-service-key".to_string(),
            key_strategy: KeyStrategy::Sequential,
        }
    }
}

impl TestConfig {
    /// Relational config aimed at a mock PostgREST server.
    pub fn relational(supabase_url: &str) -> Self {
        Self {
            supabase_url: supabase_url.to_string(),
            ..Self::default()
        }
    }

    pub fn generated_keys() -> Self {
        Self {
            key_strategy: KeyStrategy::Generated,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self, backend: StorageBackend) -> AppConfig {
        AppConfig {
            storage_backend: backend,
            supabase_url: self.supabase_url.clone(),
            supabase_service_key: self.supabase_service_key.clone(),
            memory_key_strategy: self.key_strategy,
            ..AppConfig::default()
        }
    }

    /// Fresh in-memory state; nothing is shared between calls.
    pub fn memory_state(&self) -> Arc<AppState> {
        let config = self.to_app_config(StorageBackend::Memory);
        Arc::new(AppState::new(config, Database::memory(self.key_strategy)))
    }

    pub fn relational_state(&self) -> Arc<AppState> {
        let config = self.to_app_config(StorageBackend::Relational);
        let database = Database::Relational(shared_database::supabase::SupabaseClient::new(&config));
        Arc::new(AppState::new(config, database))
    }
}

pub struct TestUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
            phone: "123".to_string(),
            password: "pw".to_string(),
        }
    }
}

impl TestUser {
    /// A user whose email and phone collide with nobody else's.
    pub fn unique(first_name: &str) -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            first_name: first_name.to_string(),
            email: format!("{}.{}@example.com", first_name.to_lowercase(), &tag[..8]),
            phone: format!("+353{}", &tag[..9]),
            ..Self::default()
        }
    }

    pub fn to_user_fields(&self) -> UserFields {
        UserFields::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.password.clone(),
            None,
        )
    }

    pub fn to_json(&self) -> Value {
        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
            "phone": self.phone,
            "password": self.password
        })
    }
}

pub struct MockPostgrestResponses;

impl MockPostgrestResponses {
    /// A table row as PostgREST returns it: integer `id` plus snake_case columns.
    pub fn row(id: i64, record: Value) -> Value {
        let mut row = to_columns(record);
        if let Value::Object(columns) = &mut row {
            columns.insert("id".to_string(), json!(id));
        }
        row
    }

    pub fn unique_violation(constraint: &str) -> Value {
        json!({
            "code": "23505",
            "details": null,
            "hint": null,
            "message": format!("duplicate key value violates unique constraint \"{}\"", constraint)
        })
    }
}

/// Drives one request through `app` and returns the status with the parsed JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid test request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
