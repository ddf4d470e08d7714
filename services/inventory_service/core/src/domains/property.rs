//! Property definitions and property values shared by catalogue categories,
//! catalogue items, and items.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Declared type of a property definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
        };
        write!(f, "{name}")
    }
}

/// A single scalar value assignable to a property.
///
/// Deliberately untagged: on the wire this is a bare JSON string, number, or
/// boolean. Variant order matters for deserialization — `Boolean` is tried
/// before `Number` so that `true`/`false` never get coerced into `1.0`/`0.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum PropertyScalar {
    Boolean(bool),
    Number(f64),
    Str(String),
}

impl PropertyScalar {
    pub fn type_of(&self) -> PropertyType {
        match self {
            PropertyScalar::Boolean(_) => PropertyType::Boolean,
            PropertyScalar::Number(_) => PropertyType::Number,
            PropertyScalar::Str(_) => PropertyType::String,
        }
    }

    /// Case-sensitive equality, used when checking a submitted value against
    /// an `allowed_values` list (spec §9: this comparison is deliberately
    /// case-sensitive, unlike duplicate-detection within the list itself).
    pub fn matches(&self, other: &PropertyScalar) -> bool {
        self == other
    }

    /// Case-insensitive equality for strings, exact for everything else.
    /// Used for duplicate-detection inside an `allowed_values` list.
    pub fn eq_case_insensitive(&self, other: &PropertyScalar) -> bool {
        match (self, other) {
            (PropertyScalar::Str(a), PropertyScalar::Str(b)) => a.eq_ignore_ascii_case(b),
            _ => self == other,
        }
    }
}

impl fmt::Display for PropertyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyScalar::Boolean(b) => write!(f, "{b}"),
            PropertyScalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            PropertyScalar::Number(n) => write!(f, "{n}"),
            PropertyScalar::Str(s) => write!(f, "{s}"),
        }
    }
}

/// An `allowed_values` constraint on a property definition. The only
/// variant is `list`; the tag is carried on the wire so that unrecognized
/// variants can be rejected rather than silently accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AllowedValues {
    List { values: Vec<PropertyScalar> },
}

impl AllowedValues {
    pub fn values(&self) -> &[PropertyScalar] {
        match self {
            AllowedValues::List { values } => values,
        }
    }
}

/// A typed attribute slot declared on a leaf catalogue category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Property {
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: PropertyType,
    pub unit_id: Option<ObjectId>,
    pub unit: Option<String>,
    pub mandatory: bool,
    pub allowed_values: Option<AllowedValues>,
}

/// A value assigned to a property on a catalogue item or item.
///
/// Carries a cached copy of `name`/`unit` alongside the reference `id` back
/// to the defining [`Property`]; the reference is the source of truth for
/// identity, the cache is kept consistent by the propagation coordinator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PropertyValue {
    pub id: ObjectId,
    pub name: String,
    pub unit_id: Option<ObjectId>,
    pub unit: Option<String>,
    pub value: Option<PropertyScalar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_deserializes_as_boolean_not_number() {
        let v: PropertyScalar = serde_json::from_str("true").unwrap();
        assert_eq!(v, PropertyScalar::Boolean(true));
    }

    #[test]
    fn number_deserializes_as_number() {
        let v: PropertyScalar = serde_json::from_str("42").unwrap();
        assert_eq!(v, PropertyScalar::Number(42.0));
    }

    #[test]
    fn case_insensitive_duplicate_check_ignores_case() {
        let a = PropertyScalar::Str("Red".to_string());
        let b = PropertyScalar::Str("red".to_string());
        assert!(a.eq_case_insensitive(&b));
        assert!(!a.matches(&b));
    }

    #[test]
    fn number_displays_without_trailing_decimal() {
        assert_eq!(PropertyScalar::Number(1.0).to_string(), "1");
        assert_eq!(PropertyScalar::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn property_type_displays_lowercase() {
        assert_eq!(PropertyType::Number.to_string(), "number");
        assert_eq!(PropertyType::String.to_string(), "string");
        assert_eq!(PropertyType::Boolean.to_string(), "boolean");
    }

    #[test]
    fn allowed_values_list_round_trips() {
        let av = AllowedValues::List {
            values: vec![PropertyScalar::Number(1.0), PropertyScalar::Number(2.0)],
        };
        let json = serde_json::to_string(&av).unwrap();
        let back: AllowedValues = serde_json::from_str(&json).unwrap();
        assert_eq!(av, back);
        assert!(json.contains("\"type\":\"list\""));
    }
}
