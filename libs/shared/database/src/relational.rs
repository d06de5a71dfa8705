use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use shared_models::{EntityId, Record, RepositoryError, Stored};

use crate::columns::{from_columns, to_columns};
use crate::repository::Repository;
use crate::supabase::SupabaseClient;

/// Repository over a PostgREST table named after `T::COLLECTION`.
///
/// The table owns an `id bigint generated always as identity` column and
/// snake_case columns for every record field. Unique constraints live in the
/// schema; a violation comes back as HTTP 409.
pub struct RelationalRepository<T> {
    client: SupabaseClient,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RelationalRepository<T> {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn table_path(&self) -> String {
        format!("/rest/v1/{}", T::COLLECTION)
    }

    fn row_path(&self, id: i64) -> String {
        format!("/rest/v1/{}?id=eq.{}", T::COLLECTION, id)
    }

    fn from_row(row: Value) -> Result<Stored<T>, RepositoryError> {
        Ok(serde_json::from_value(from_columns(row))?)
    }

    fn first_row(rows: Vec<Value>) -> Result<Option<Stored<T>>, RepositoryError> {
        rows.into_iter().next().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for RelationalRepository<T> {
    async fn create(&self, record: T) -> Result<Stored<T>, RepositoryError> {
        debug!("Inserting row into {}", T::COLLECTION);

        let body = to_columns(serde_json::to_value(&record)?);
        let rows: Vec<Value> = self
            .client
            .request(Method::POST, &self.table_path(), Some(body), true)
            .await?;

        let stored = Self::first_row(rows)?.ok_or_else(|| {
            RepositoryError::Backend(format!("Insert into {} returned no row", T::COLLECTION))
        })?;
        debug!("Row created in {} with ID: {}", T::COLLECTION, stored.id);

        Ok(stored)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Stored<T>>, RepositoryError> {
        debug!("Fetching {} row: {}", T::COLLECTION, id);

        // Keys minted elsewhere never name a row here.
        let Some(key) = id.as_i64() else {
            return Ok(None);
        };

        let rows: Vec<Value> = self
            .client
            .request(Method::GET, &self.row_path(key), None, false)
            .await?;

        Self::first_row(rows)
    }

    async fn find_all(&self) -> Result<Vec<Stored<T>>, RepositoryError> {
        debug!("Listing {} rows", T::COLLECTION);

        let path = format!("{}?order=id.asc", self.table_path());
        let rows: Vec<Value> = self.client.request(Method::GET, &path, None, false).await?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn update(&self, id: &EntityId, record: T) -> Result<Option<Stored<T>>, RepositoryError> {
        debug!("Updating {} row: {}", T::COLLECTION, id);

        let Some(key) = id.as_i64() else {
            return Ok(None);
        };

        let body = to_columns(serde_json::to_value(&record)?);
        let rows: Vec<Value> = self
            .client
            .request(Method::PATCH, &self.row_path(key), Some(body), true)
            .await?;

        Self::first_row(rows)
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting {} row: {}", T::COLLECTION, id);

        let Some(key) = id.as_i64() else {
            return Ok(false);
        };

        let rows: Vec<Value> = self
            .client
            .request(Method::DELETE, &self.row_path(key), None, true)
            .await?;

        Ok(!rows.is_empty())
    }
}
