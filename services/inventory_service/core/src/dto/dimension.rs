//! Request/response payloads for the dimension entities: Unit, UsageStatus,
//! Manufacturer (§4.6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::dimension::{Manufacturer, Unit, UsageStatus};
use crate::dto::common::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UnitPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UnitResponse {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<Unit> for UnitResponse {
    fn from(u: Unit) -> Self {
        Self {
            id: u.id,
            value: u.value,
            code: u.code,
            created_time: u.created_time,
            modified_time: u.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UsageStatusPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UsageStatusResponse {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<UsageStatus> for UsageStatusResponse {
    fn from(u: UsageStatus) -> Self {
        Self {
            id: u.id,
            value: u.value,
            code: u.code,
            created_time: u.created_time,
            modified_time: u.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ManufacturerPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub url: Option<String>,
    pub address_building_number: Option<String>,
    pub address_street_name: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub address_country: Option<String>,
    pub address_postcode: Option<String>,
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ManufacturerPatchRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub address_building_number: Option<String>,
    pub address_street_name: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub address_country: Option<String>,
    pub address_postcode: Option<String>,
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ManufacturerResponse {
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

impl From<Manufacturer> for ManufacturerResponse {
    fn from(m: Manufacturer) -> Self {
        Self {
            id: m.id,
            name: m.name,
            code: m.code,
            url: m.url,
            address_building_number: m.address_building_number,
            address_street_name: m.address_street_name,
            address_town: m.address_town,
            address_county: m.address_county,
            address_country: m.address_country,
            address_postcode: m.address_postcode,
            telephone: m.telephone,
            created_time: m.created_time,
            modified_time: m.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ManufacturerListResponse {
    pub data: Vec<ManufacturerResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DimensionListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}
