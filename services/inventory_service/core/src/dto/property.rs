//! Request/response payloads for property definitions (§4.2, §4.3).

use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::property::{AllowedValues, PropertyScalar, PropertyType};

/// Body of `POST /v1/catalogue-categories/{id}/properties`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PropertyPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: PropertyType,
    pub unit_id: Option<ObjectId>,
    #[serde(default)]
    pub mandatory: bool,
    pub allowed_values: Option<AllowedValues>,
    pub default_value: Option<PropertyScalar>,
}

/// Body of `PATCH /v1/catalogue-categories/{id}/properties/{pid}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PropertyPatchRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// `Some(None)` means "set to null"; `None` means "field omitted, leave
    /// unchanged". Serialized as an explicit two-level option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Option<AllowedValues>>,
}

/// A property definition as embedded in a catalogue category, as submitted
/// on create of the category itself (no `default_value` — categories are
/// created empty of instances, so there is nothing to propagate into yet).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PropertyDefinitionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: PropertyType,
    pub unit_id: Option<ObjectId>,
    #[serde(default)]
    pub mandatory: bool,
    pub allowed_values: Option<AllowedValues>,
}
