use std::sync::Arc;

use tracing::debug;

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Hospital, UpdateHospitalRequest};

pub struct HospitalService {
    repository: Arc<dyn Repository<Hospital>>,
}

impl HospitalService {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: database.repository(),
        }
    }

    pub async fn create_hospital(&self, hospital: Hospital) -> Result<Stored<Hospital>, RepositoryError> {
        debug!("Registering hospital: {}", hospital.hospital_name);
        self.repository.create(hospital).await
    }

    pub async fn get_hospital(&self, hospital_id: &EntityId) -> Result<Option<Stored<Hospital>>, RepositoryError> {
        self.repository.find_by_id(hospital_id).await
    }

    pub async fn list_hospitals(&self) -> Result<Vec<Stored<Hospital>>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn update_hospital(
        &self,
        hospital_id: &EntityId,
        hospital: Hospital,
    ) -> Result<Option<Stored<Hospital>>, RepositoryError> {
        debug!("Updating hospital: {}", hospital_id);
        self.repository.update(hospital_id, hospital).await
    }

    pub async fn patch_hospital(
        &self,
        hospital_id: &EntityId,
        changes: UpdateHospitalRequest,
    ) -> Result<Option<Stored<Hospital>>, RepositoryError> {
        let Some(current) = self.repository.find_by_id(hospital_id).await? else {
            return Ok(None);
        };

        let mut hospital = current.into_record();
        changes.apply_to(&mut hospital);
        self.repository.update(hospital_id, hospital).await
    }

    pub async fn delete_hospital(&self, hospital_id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting hospital: {}", hospital_id);
        self.repository.delete(hospital_id).await
    }
}
