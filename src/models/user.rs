use super::{RecordId, lenient};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of a user account.
///
/// Only `driver` has a meaning for the dashboard; every other value is a
/// generic user and is kept verbatim so updates send it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum UserType {
    Driver,
    Generic(String),
}

impl UserType {
    /// The plain `user` type used when creating non-driver accounts.
    pub fn user() -> Self {
        UserType::Generic("user".to_string())
    }

    pub fn is_driver(&self) -> bool {
        matches!(self, UserType::Driver)
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserType::Driver => "driver",
            UserType::Generic(raw) => raw,
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::user()
    }
}

impl From<Option<String>> for UserType {
    fn from(raw: Option<String>) -> Self {
        match raw {
            Some(raw) if raw == "driver" => UserType::Driver,
            Some(raw) if !raw.trim().is_empty() => UserType::Generic(raw),
            _ => UserType::user(),
        }
    }
}

impl From<&str> for UserType {
    fn from(raw: &str) -> Self {
        UserType::from(Some(raw.to_string()))
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        user_type.as_str().to_string()
    }
}

impl Display for UserType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by `GET /api/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::user_type")]
    pub user_type: UserType,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub afm: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub created_at: Option<String>,
}

impl UserRecord {
    pub fn is_driver(&self) -> bool {
        self.user_type.is_driver()
    }
}

/// Body of `POST /api/admin/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afm: Option<String>,
}

impl NewUser {
    /// A driver account with every field drivers require.
    #[cfg(test)]
    pub fn driver(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        afm: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            user_type: UserType::Driver,
            password: Some(password.into()),
            name: Some(name.into()),
            phone: Some(phone.into()),
            afm: Some(afm.into()),
        }
    }
}

/// Body of `PUT /api/admin/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub email: String,
    pub user_type: UserType,
}
