use serde::{Deserialize, Serialize};

/// Personal and login details shared by admins, doctors and patients.
///
/// Embedded by value and flattened, so an `Admin` serializes as
/// `{"firstName": ..., "email": ..., ...}` with no nesting. No field is checked;
/// `email` and `phone` uniqueness is left to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl UserFields {
    pub const UNIQUE_FIELDS: &'static [&'static str] = &["email", "phone"];

    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
            description,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial change to [`UserFields`]; `None` leaves the field as it is.
/// `description` distinguishes absent (keep) from `null` (clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl UpdateUserFields {
    pub fn apply_to(self, user: &mut UserFields) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(description) = self.description {
            user.description = description;
        }
    }
}
