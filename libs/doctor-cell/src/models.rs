use serde::{Deserialize, Serialize};

use shared_models::{Record, UpdateUserFields, UserFields};

/// A doctor and where they practise.
///
/// `hospital_name` is free text. It is not checked against the hospital
/// collection and nothing keeps the two in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(flatten)]
    pub user: UserFields,
    pub specialisation: String,
    pub hospital_name: String,
}

impl Doctor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        specialisation: impl Into<String>,
        hospital_name: impl Into<String>,
    ) -> Self {
        Self {
            user: UserFields::new(first_name, last_name, email, phone, password, None),
            specialisation: specialisation.into(),
            hospital_name: hospital_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        self.user.full_name()
    }
}

impl Record for Doctor {
    const COLLECTION: &'static str = "doctor";
    const UNIQUE_FIELDS: &'static [&'static str] = UserFields::UNIQUE_FIELDS;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    #[serde(flatten)]
    pub user: UpdateUserFields,
    pub specialisation: Option<String>,
    pub hospital_name: Option<String>,
}

impl UpdateDoctorRequest {
    pub fn apply_to(self, doctor: &mut Doctor) {
        self.user.apply_to(&mut doctor.user);
        if let Some(specialisation) = self.specialisation {
            doctor.specialisation = specialisation;
        }
        if let Some(hospital_name) = self.hospital_name {
            doctor.hospital_name = hospital_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_wire_format_is_flat() {
        let doctor = Doctor::new("Ada", "Byrne", "ada@x.com", "555", "pw", "Cardiology", "General Hospital");
        let value = serde_json::to_value(&doctor).unwrap();

        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["specialisation"], "Cardiology");
        assert_eq!(value["hospitalName"], "General Hospital");
        assert!(value.get("user").is_none());

        let back: Doctor = serde_json::from_value(value).unwrap();
        assert_eq!(back, doctor);
    }

    #[test]
    fn test_update_request_mixes_user_and_doctor_fields() {
        let mut doctor = Doctor::new("Ada", "Byrne", "ada@x.com", "555", "pw", "Cardiology", "General Hospital");
        let changes: UpdateDoctorRequest = serde_json::from_value(json!({
            "lastName": "Walsh",
            "hospitalName": "St. Vincent's"
        }))
        .unwrap();

        changes.apply_to(&mut doctor);

        assert_eq!(doctor.user.last_name, "Walsh");
        assert_eq!(doctor.hospital_name, "St. Vincent's");
        assert_eq!(doctor.specialisation, "Cardiology");
        assert_eq!(doctor.user.email, "ada@x.com");
    }
}
