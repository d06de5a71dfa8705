use serde::{Deserialize, Serialize};

use shared_models::Record;

/// A hospital with its own login. Doctors and appointments refer to it by
/// name only, so renaming a hospital leaves those records pointing at the old name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub hospital_name: String,
    pub hospital_address: String,
    pub departments: String,
    pub email: String,
    pub phone_no: String,
    pub password: String,
}

impl Hospital {
    pub fn new(
        hospital_name: impl Into<String>,
        hospital_address: impl Into<String>,
        departments: impl Into<String>,
        email: impl Into<String>,
        phone_no: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hospital_name: hospital_name.into(),
            hospital_address: hospital_address.into(),
            departments: departments.into(),
            email: email.into(),
            phone_no: phone_no.into(),
            password: password.into(),
        }
    }
}

impl Record for Hospital {
    const COLLECTION: &'static str = "hospital";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "phoneNo"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHospitalRequest {
    pub hospital_name: Option<String>,
    pub hospital_address: Option<String>,
    pub departments: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub password: Option<String>,
}

impl UpdateHospitalRequest {
    pub fn apply_to(self, hospital: &mut Hospital) {
        if let Some(hospital_name) = self.hospital_name {
            hospital.hospital_name = hospital_name;
        }
        if let Some(hospital_address) = self.hospital_address {
            hospital.hospital_address = hospital_address;
        }
        if let Some(departments) = self.departments {
            hospital.departments = departments;
        }
        if let Some(email) = self.email {
            hospital.email = email;
        }
        if let Some(phone_no) = self.phone_no {
            hospital.phone_no = phone_no;
        }
        if let Some(password) = self.password {
            hospital.password = password;
        }
    }
}
