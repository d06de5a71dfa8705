use serde::{Deserialize, Serialize};

use shared_models::Record;

/// A booked slot. Every field is free text as entered: `date` and `time` are not
/// parsed, and `doctor_name`/`hospital_name` are names rather than ids, so an
/// appointment can name a doctor or hospital that does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub date: String,
    pub time: String,
    pub doctor_name: String,
    pub hospital_name: String,
}

impl Appointment {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        doctor_name: impl Into<String>,
        hospital_name: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            doctor_name: doctor_name.into(),
            hospital_name: hospital_name.into(),
        }
    }
}

impl Record for Appointment {
    const COLLECTION: &'static str = "appointment";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub doctor_name: Option<String>,
    pub hospital_name: Option<String>,
}

impl UpdateAppointmentRequest {
    pub fn apply_to(self, appointment: &mut Appointment) {
        if let Some(date) = self.date {
            appointment.date = date;
        }
        if let Some(time) = self.time {
            appointment.time = time;
        }
        if let Some(doctor_name) = self.doctor_name {
            appointment.doctor_name = doctor_name;
        }
        if let Some(hospital_name) = self.hospital_name {
            appointment.hospital_name = hospital_name;
        }
    }
}
