use std::sync::Arc;

use tracing::debug;

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Patient, UpdatePatientRequest};

pub struct PatientService {
    repository: Arc<dyn Repository<Patient>>,
}

impl PatientService {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: database.repository(),
        }
    }

    pub async fn create_patient(&self, patient: Patient) -> Result<Stored<Patient>, RepositoryError> {
        debug!("Creating new patient profile for: {}", patient.user.email);

        let patient = self.repository.create(patient).await?;
        debug!("Patient profile created successfully with ID: {}", patient.id);

        Ok(patient)
    }

    pub async fn get_patient(&self, patient_id: &EntityId) -> Result<Option<Stored<Patient>>, RepositoryError> {
        debug!("Fetching patient profile: {}", patient_id);
        self.repository.find_by_id(patient_id).await
    }

    pub async fn list_patients(&self) -> Result<Vec<Stored<Patient>>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn update_patient(
        &self,
        patient_id: &EntityId,
        patient: Patient,
    ) -> Result<Option<Stored<Patient>>, RepositoryError> {
        debug!("Updating patient profile: {}", patient_id);
        self.repository.update(patient_id, patient).await
    }

    pub async fn patch_patient(
        &self,
        patient_id: &EntityId,
        request: UpdatePatientRequest,
    ) -> Result<Option<Stored<Patient>>, RepositoryError> {
        debug!("Patching patient profile: {}", patient_id);

        let Some(current) = self.repository.find_by_id(patient_id).await? else {
            return Ok(None);
        };

        let mut patient = current.into_record();
        request.user.apply_to(&mut patient.user);
        self.repository.update(patient_id, patient).await
    }

    pub async fn delete_patient(&self, patient_id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting patient profile: {}", patient_id);
        self.repository.delete(patient_id).await
    }
}
