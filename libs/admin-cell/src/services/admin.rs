use std::sync::Arc;

use tracing::debug;

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Admin, UpdateAdminRequest};

/// Pass-through to the admin repository. Uniqueness and every other rule is
/// the store's business; nothing is checked here.
pub struct AdminService {
    repository: Arc<dyn Repository<Admin>>,
}

impl AdminService {
    pub fn new(database: &Database) -> Self {
        Self::with_repository(database.repository())
    }

    pub fn with_repository(repository: Arc<dyn Repository<Admin>>) -> Self {
        Self { repository }
    }

    pub async fn create_admin(&self, admin: Admin) -> Result<Stored<Admin>, RepositoryError> {
        debug!("Creating admin: {}", admin.user.email);
        self.repository.create(admin).await
    }

    pub async fn get_admin(&self, admin_id: &EntityId) -> Result<Option<Stored<Admin>>, RepositoryError> {
        self.repository.find_by_id(admin_id).await
    }

    pub async fn list_admins(&self) -> Result<Vec<Stored<Admin>>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn update_admin(
        &self,
        admin_id: &EntityId,
        admin: Admin,
    ) -> Result<Option<Stored<Admin>>, RepositoryError> {
        debug!("Replacing admin: {}", admin_id);
        self.repository.update(admin_id, admin).await
    }

    pub async fn patch_admin(
        &self,
        admin_id: &EntityId,
        changes: UpdateAdminRequest,
    ) -> Result<Option<Stored<Admin>>, RepositoryError> {
        debug!("Patching admin: {}", admin_id);

        let Some(current) = self.repository.find_by_id(admin_id).await? else {
            return Ok(None);
        };

        let mut admin = current.into_record();
        changes.apply_to(&mut admin);
        self.repository.update(admin_id, admin).await
    }

    pub async fn delete_admin(&self, admin_id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting admin: {}", admin_id);
        self.repository.delete(admin_id).await
    }
}
