//! Response envelopes of the admin API.
//!
//! Every response carries a `success` flag; a missing flag counts as failure.

use super::{ShopRecord, UserRecord};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, rename = "shopAccounts")]
    pub shop_accounts: Vec<ShopRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of every write endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A successful write, with the server's message if it sent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: Option<String>,
}

impl Acknowledgement {
    #[cfg(test)]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The server's message, or `fallback` when it was missing or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShopStatus, UserType};

    #[test]
    fn shops_envelope_reads_camel_case_list() {
        let envelope: ShopsEnvelope = serde_json::from_str(
            r#"{"success": true, "shopAccounts": [{"id": 1, "status": "active"}]}"#,
        )
        .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.shop_accounts.len(), 1);
    }

    #[test]
    /// Nulls and numbers in text fields still decode the rest of the list.
    fn odd_records_do_not_fail_the_list() {
        let shops: ShopsEnvelope = serde_json::from_str(
            r#"{"success": true, "shopAccounts": [
                {"id": 1, "shop_name": "Fourno", "status": "active"},
                {"id": 2, "shop_name": null, "email": null, "status": null, "afm": 123456789, "phone": 2101234567},
                {"id": "3", "shop_name": "Kafe", "status": "pending"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(shops.shop_accounts.len(), 3);
        let odd = &shops.shop_accounts[1];
        assert_eq!(odd.shop_name, "");
        assert_eq!(odd.status, ShopStatus::Unknown);
        assert_eq!(odd.afm.as_deref(), Some("123456789"));
        assert_eq!(odd.phone.as_deref(), Some("2101234567"));

        let users: UsersEnvelope = serde_json::from_str(
            r#"{"success": true, "users": [
                {"id": 1, "email": "a@b.gr", "user_type": "driver"},
                {"id": 2, "email": null, "user_type": null, "afm": 987654321, "name": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(users.users.len(), 2);
        assert_eq!(users.users[1].email, "");
        assert_eq!(users.users[1].user_type, UserType::user());
        assert_eq!(users.users[1].afm.as_deref(), Some("987654321"));
        assert_eq!(users.users[1].name, None);
    }

    #[test]
    fn missing_success_flag_is_failure() {
        let envelope: StatusEnvelope = serde_json::from_str(r#"{"message": "?"}"#).unwrap();
        assert!(!envelope.success);
    }

    #[test]
    fn acknowledgement_falls_back_on_blank_message() {
        assert_eq!(Acknowledgement::default().message_or("Saved"), "Saved");
        assert_eq!(Acknowledgement::with_message("  ").message_or("Saved"), "Saved");
        assert_eq!(Acknowledgement::with_message("Done").message_or("Saved"), "Done");
    }
}
