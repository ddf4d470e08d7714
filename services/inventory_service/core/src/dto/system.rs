//! Request/response payloads for systems (§4.1, mirrors categories sans
//! properties).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::system::{Importance, System};
use crate::dto::common::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SystemPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub parent_id: Option<ObjectId>,
    pub importance: Importance,
    pub description: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SystemPatchRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<ObjectId>>,
    pub importance: Option<Importance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SystemResponse {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub importance: Importance,
    pub description: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<System> for SystemResponse {
    fn from(s: System) -> Self {
        Self {
            id: s.id,
            name: s.name,
            code: s.code,
            parent_id: s.parent_id,
            importance: s.importance,
            description: s.description,
            location: s.location,
            owner: s.owner,
            created_time: s.created_time,
            modified_time: s.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SystemListResponse {
    pub data: Vec<SystemResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemListQuery {
    pub parent_id: Option<String>,
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
