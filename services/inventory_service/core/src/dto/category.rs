//! Request/response payloads for catalogue categories (§4.1).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::category::{Breadcrumbs, CatalogueCategory};
use crate::domains::property::Property;
use crate::dto::common::PaginationInfo;
use crate::dto::property::PropertyDefinitionRequest;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub parent_id: Option<ObjectId>,
    pub is_leaf: bool,
    #[serde(default)]
    #[validate(nested)]
    pub properties: Vec<PropertyDefinitionRequest>,
}

/// Partial update. `parent_id` and `properties` use a two-level `Option` so
/// that "field omitted" (no change) is distinguishable from "explicit
/// `null`" (move to root / clear properties).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryPatchRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<ObjectId>>,
    pub is_leaf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub properties: Option<Vec<PropertyDefinitionRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryResponse {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub is_leaf: bool,
    pub properties: Vec<Property>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<CatalogueCategory> for CategoryResponse {
    fn from(c: CatalogueCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            code: c.code,
            parent_id: c.parent_id,
            is_leaf: c.is_leaf,
            properties: c.properties,
            created_time: c.created_time,
            modified_time: c.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryListResponse {
    pub data: Vec<CategoryResponse>,
    pub pagination: PaginationInfo,
}

/// Query parameters for `GET /v1/catalogue-categories`.
///
/// `parent_id` is carried as a raw string: omission means "no filter", the
/// literal `"null"` means "roots only", and anything else is parsed (and,
/// per §4.1, permissively discarded to "no match" if malformed) by the
/// repository layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryListQuery {
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BreadcrumbsResponse {
    pub trail: Vec<BreadcrumbEntryResponse>,
    pub full_trail: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BreadcrumbEntryResponse {
    pub id: ObjectId,
    pub name: String,
}

impl From<Breadcrumbs> for BreadcrumbsResponse {
    fn from(b: Breadcrumbs) -> Self {
        Self {
            trail: b
                .trail
                .into_iter()
                .map(|e| BreadcrumbEntryResponse {
                    id: e.id,
                    name: e.name,
                })
                .collect(),
            full_trail: b.full_trail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_request_defaults_to_no_change() {
        let patch: CategoryPatchRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
        assert!(patch.parent_id.is_none());
        assert!(patch.properties.is_none());
    }

    #[test]
    fn patch_request_distinguishes_null_parent_from_omitted() {
        let patch: CategoryPatchRequest =
            serde_json::from_str(r#"{"parent_id": null}"#).unwrap();
        assert_eq!(patch.parent_id, Some(None));
    }
}
