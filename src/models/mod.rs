//! Records exchanged with the admin API.
//!
//! Records are deserialised once at the API boundary; ids are normalised into
//! [`RecordId`] there so the rest of the crate only ever compares strings.

mod envelope;
mod id;
mod lenient;
mod shop;
mod user;

pub use envelope::{Acknowledgement, ShopsEnvelope, StatusEnvelope, UsersEnvelope};
pub use id::RecordId;
pub use shop::{NewShop, ShopFilter, ShopRecord, ShopStatus, ShopUpdate};
pub use user::{NewUser, UserRecord, UserType, UserUpdate};

use serde::{Deserialize, Serialize};

/// Body of both password endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub password: String,
}

impl PasswordChange {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}
