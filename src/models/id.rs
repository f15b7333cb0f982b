use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical record identifier.
///
/// The admin API returns ids as JSON numbers for some records and as strings
/// for others. Both forms are normalised to their decimal string so `5` and
/// `"5"` name the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Signed(n) => RecordId(n.to_string()),
            // 7.0 is still record 7
            RawId::Float(n) if n.fract() == 0.0 && n.is_finite() => {
                RecordId(format!("{:.0}", n))
            }
            RawId::Float(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s.trim().to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(RecordId::from)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.trim().to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::from(value.as_str())
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value.to_string())
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// A numeric id and its string form are the same id.
    fn number_and_string_ids_are_equal() {
        let from_number: RecordId = serde_json::from_str("5").unwrap();
        let from_string: RecordId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, RecordId::from(5));
        assert_eq!(from_string, RecordId::from("5"));
    }

    #[test]
    fn whole_floats_and_padded_strings_normalise() {
        let float: RecordId = serde_json::from_str("7.0").unwrap();
        let padded: RecordId = serde_json::from_str("\" 7 \"").unwrap();
        assert_eq!(float, padded);
        assert_eq!(float.as_str(), "7");
    }

    #[test]
    fn uuid_ids_pass_through() {
        let id: RecordId =
            serde_json::from_str("\"0b1c6a4e-3f7e-4c55-9c1e-6d2f0d7f1a22\"").unwrap();
        assert_eq!(id.to_string(), "0b1c6a4e-3f7e-4c55-9c1e-6d2f0d7f1a22");
    }

    #[test]
    fn rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<RecordId>("{\"id\": 1}").is_err());
        assert!(serde_json::from_str::<RecordId>("null").is_err());
    }
}
