//! Serde support.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Url;

/// Serializes the raw text as a string scalar.
impl Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes a string scalar, trimming surrounding whitespace before
/// validation. Invalid input fails deserialization of the enclosing
/// document with the full parse diagnostic in the message.
impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(s.trim()).map_err(de::Error::custom)
    }
}
