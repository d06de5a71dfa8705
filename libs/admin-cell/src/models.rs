use serde::{Deserialize, Serialize};

use shared_models::{Record, UpdateUserFields, UserFields};

/// Administrator account. Carries nothing beyond the shared user fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(flatten)]
    pub user: UserFields,
}

impl Admin {
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
}

impl Record for Admin {
    const COLLECTION: &'static str = "admin";
    const UNIQUE_FIELDS: &'static [&'static str] = UserFields::UNIQUE_FIELDS;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdminRequest {
    #[serde(flatten)]
    pub user: UpdateUserFields,
}

impl UpdateAdminRequest {
    pub fn apply_to(self, admin: &mut Admin) {
        self.user.apply_to(&mut admin.user);
    }
}
