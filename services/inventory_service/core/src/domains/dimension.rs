//! Dimension entities: Unit, UsageStatus, Manufacturer. Each is a flat,
//! globally-unique-coded record referenced by the tree entities; deletion
//! is blocked while still referenced (§4.6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Unit {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UsageStatus {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Manufacturer {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub url: Option<String>,
    pub address_building_number: Option<String>,
    pub address_street_name: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub address_country: Option<String>,
    pub address_postcode: Option<String>,
    pub telephone: Option<String>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}
