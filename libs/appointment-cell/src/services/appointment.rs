use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Appointment, UpdateAppointmentRequest};

/// Stores appointments exactly as given. There is no conflict detection: two
/// appointments for the same doctor at the same time are both accepted.
pub struct AppointmentService {
    repository: Arc<dyn Repository<Appointment>>,
}

impl AppointmentService {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: database.repository(),
        }
    }

    pub async fn create_appointment(&self, appointment: Appointment) -> Result<Stored<Appointment>, RepositoryError> {
        debug!(
            "Creating appointment with {} at {} on {} {}",
            appointment.doctor_name, appointment.hospital_name, appointment.date, appointment.time
        );

        let stored = self.repository.create(appointment).await?;
        info!("Appointment {} created", stored.id);

        Ok(stored)
    }

    pub async fn get_appointment(
        &self,
        appointment_id: &EntityId,
    ) -> Result<Option<Stored<Appointment>>, RepositoryError> {
        self.repository.find_by_id(appointment_id).await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Stored<Appointment>>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn update_appointment(
        &self,
        appointment_id: &EntityId,
        appointment: Appointment,
    ) -> Result<Option<Stored<Appointment>>, RepositoryError> {
        debug!("Updating appointment {}", appointment_id);
        self.repository.update(appointment_id, appointment).await
    }

    pub async fn patch_appointment(
        &self,
        appointment_id: &EntityId,
        changes: UpdateAppointmentRequest,
    ) -> Result<Option<Stored<Appointment>>, RepositoryError> {
        debug!("Patching appointment {}", appointment_id);

        let Some(current) = self.repository.find_by_id(appointment_id).await? else {
            return Ok(None);
        };

        let mut appointment = current.into_record();
        changes.apply_to(&mut appointment);
        self.repository.update(appointment_id, appointment).await
    }

    pub async fn delete_appointment(&self, appointment_id: &EntityId) -> Result<bool, RepositoryError> {
        info!("Deleting appointment {}", appointment_id);
        self.repository.delete(appointment_id).await
    }
}
