//! Common types shared across the inventory service crates.

pub use chrono::{DateTime, Utc};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not parse as a valid [`ObjectId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidObjectIdError(pub String);

impl fmt::Display for InvalidObjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ObjectId value: {}", self.0)
    }
}

impl std::error::Error for InvalidObjectIdError {}

/// A 12-byte identity, represented on the wire as 24 lowercase hex characters.
///
/// Mirrors the framing of a MongoDB ObjectId so the wire format observed by
/// clients is unchanged, without requiring a MongoDB driver: stored in
/// Postgres as `CHAR(24)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a new id from random bytes. Not a true Mongo ObjectId
    /// (no timestamp/counter/machine fields) since nothing in this service
    /// depends on that structure beyond the 24-hex-char shape.
    pub fn new() -> Self {
        let mut bytes = [0u8; 12];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Parses a 24-character hex string, returning `None` rather than an
    /// error. Used at filter/query boundaries where an invalid id should be
    /// treated as "no match" instead of a hard failure (spec §4.7).
    pub fn try_parse(s: &str) -> Option<Self> {
        if s.len() != 24 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; 12];
        for i in 0..12 {
            bytes[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| InvalidObjectIdError(s.to_string()))
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl sqlx::Type<sqlx::Postgres> for ObjectId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl sqlx::Encode<'_, sqlx::Postgres> for ObjectId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode(self.to_string(), buf)
    }
}

impl sqlx::Decode<'_, sqlx::Postgres> for ObjectId {
    fn decode(
        value: sqlx::postgres::PgValueRef<'_>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Self::from_str(&s).map_err(|e| Box::new(e) as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_parse() {
        let id = ObjectId::new();
        let parsed: ObjectId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc").is_none());
        assert!(ObjectId::try_parse(&"a".repeat(23)).is_none());
        assert!(ObjectId::try_parse(&"a".repeat(25)).is_none());
    }

    #[test]
    fn rejects_non_hex_chars() {
        assert!(ObjectId::try_parse(&"g".repeat(24)).is_none());
    }

    #[test]
    fn accepts_valid_hex() {
        assert!(ObjectId::try_parse(&"a".repeat(24)).is_some());
        assert!(ObjectId::try_parse("507f1f77bcf86cd799439011").is_some());
    }

    #[test]
    fn serializes_as_json_string() {
        let id = ObjectId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
