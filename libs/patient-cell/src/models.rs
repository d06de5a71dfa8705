use serde::{Deserialize, Serialize};

use shared_models::{Record, UpdateUserFields, UserFields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    pub user: UserFields,
}

impl Patient {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user: UserFields::new(first_name, last_name, email, phone, password, None),
        }
    }

    pub fn full_name(&self) -> String {
        self.user.full_name()
    }
}

impl Record for Patient {
    const COLLECTION: &'static str = "patient";
    const UNIQUE_FIELDS: &'static [&'static str] = UserFields::UNIQUE_FIELDS;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    #[serde(flatten)]
    pub user: UpdateUserFields,
}
