//! Field decoders for record fields the server is loose about.
//!
//! `null` reads as the field's default and numbers read as their decimal
//! text, so one odd record does not fail the whole list.

use super::{ShopStatus, UserType};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(raw: Scalar) -> Self {
        match raw {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    optional_text(deserializer).map(Option::unwrap_or_default)
}

/// Unrecognised, missing and `null` statuses all read as `Unknown`.
pub fn status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ShopStatus, D::Error> {
    optional_text(deserializer)
        .map(|raw| raw.as_deref().and_then(ShopStatus::parse).unwrap_or_default())
}

pub fn user_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UserType, D::Error> {
    optional_text(deserializer).map(UserType::from)
}
