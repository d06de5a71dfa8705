use std::sync::Arc;

use tracing::debug;

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Doctor, UpdateDoctorRequest};

pub struct DoctorService {
    repository: Arc<dyn Repository<Doctor>>,
}

impl DoctorService {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: database.repository(),
        }
    }

    /// Create a new doctor profile
    pub async fn create_doctor(&self, doctor: Doctor) -> Result<Stored<Doctor>, RepositoryError> {
        debug!("Creating new doctor profile for: {}", doctor.user.email);
        self.repository.create(doctor).await
    }

    /// Get doctor by ID
    pub async fn get_doctor(&self, doctor_id: &EntityId) -> Result<Option<Stored<Doctor>>, RepositoryError> {
        debug!("Fetching doctor profile: {}", doctor_id);
        self.repository.find_by_id(doctor_id).await
    }

    pub async fn list_doctors(&self) -> Result<Vec<Stored<Doctor>>, RepositoryError> {
        self.repository.find_all().await
    }

    /// Replace a doctor profile
    pub async fn update_doctor(
        &self,
        doctor_id: &EntityId,
        doctor: Doctor,
    ) -> Result<Option<Stored<Doctor>>, RepositoryError> {
        debug!("Updating doctor profile: {}", doctor_id);
        self.repository.update(doctor_id, doctor).await
    }

    /// Apply the given fields on top of the stored profile
    pub async fn patch_doctor(
        &self,
        doctor_id: &EntityId,
        changes: UpdateDoctorRequest,
    ) -> Result<Option<Stored<Doctor>>, RepositoryError> {
        debug!("Patching doctor profile: {}", doctor_id);

        let Some(current) = self.repository.find_by_id(doctor_id).await? else {
            return Ok(None);
        };

        let mut doctor = current.into_record();
        changes.apply_to(&mut doctor);
        self.repository.update(doctor_id, doctor).await
    }

    pub async fn delete_doctor(&self, doctor_id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting doctor profile: {}", doctor_id);
        self.repository.delete(doctor_id).await
    }
}
