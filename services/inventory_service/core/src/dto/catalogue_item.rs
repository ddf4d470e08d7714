//! Request/response payloads for catalogue items (§4.4).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::catalogue_item::CatalogueItem;
use crate::domains::property::{PropertyScalar, PropertyValue};
use crate::dto::common::PaginationInfo;

/// A single `{id, value}` pair as submitted against a property on create or
/// update; unrecognized ids are silently dropped by the Instance Validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PropertyValuePostRequest {
    pub id: ObjectId,
    pub value: Option<PropertyScalar>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueItemPostRequest {
    pub catalogue_category_id: ObjectId,
    pub manufacturer_id: ObjectId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub cost_gbp: Option<f64>,
    pub cost_to_rework_gbp: Option<f64>,
    pub days_to_replace: Option<i32>,
    pub days_to_rework: Option<i32>,
    pub drawing_number: Option<String>,
    pub drawing_link: Option<String>,
    pub item_model_number: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_obsolete: bool,
    pub obsolete_reason: Option<String>,
    pub obsolete_replacement_catalogue_item_id: Option<ObjectId>,
    #[serde(default)]
    pub properties: Vec<PropertyValuePostRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueItemPatchRequest {
    pub catalogue_category_id: Option<ObjectId>,
    pub manufacturer_id: Option<ObjectId>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_gbp: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_to_rework_gbp: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_replace: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_rework: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_link: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_model_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    pub is_obsolete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsolete_reason: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsolete_replacement_catalogue_item_id: Option<Option<ObjectId>>,
    /// Required when `catalogue_category_id` changes to a category whose
    /// property-id set differs from the current one (§4.4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyValuePostRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueItemResponse {
    pub id: ObjectId,
    pub catalogue_category_id: ObjectId,
    pub manufacturer_id: ObjectId,
    pub name: String,
    pub description: Option<String>,
    pub cost_gbp: Option<f64>,
    pub cost_to_rework_gbp: Option<f64>,
    pub days_to_replace: Option<i32>,
    pub days_to_rework: Option<i32>,
    pub drawing_number: Option<String>,
    pub drawing_link: Option<String>,
    pub item_model_number: Option<String>,
    pub notes: Option<String>,
    pub is_obsolete: bool,
    pub obsolete_reason: Option<String>,
    pub obsolete_replacement_catalogue_item_id: Option<ObjectId>,
    pub properties: Vec<PropertyValue>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<CatalogueItem> for CatalogueItemResponse {
    fn from(c: CatalogueItem) -> Self {
        Self {
            id: c.id,
            catalogue_category_id: c.catalogue_category_id,
            manufacturer_id: c.manufacturer_id,
            name: c.name,
            description: c.description,
            cost_gbp: c.cost_gbp,
            cost_to_rework_gbp: c.cost_to_rework_gbp,
            days_to_replace: c.days_to_replace,
            days_to_rework: c.days_to_rework,
            drawing_number: c.drawing_number,
            drawing_link: c.drawing_link,
            item_model_number: c.item_model_number,
            notes: c.notes,
            is_obsolete: c.is_obsolete,
            obsolete_reason: c.obsolete_reason,
            obsolete_replacement_catalogue_item_id: c.obsolete_replacement_catalogue_item_id,
            properties: c.properties,
            created_time: c.created_time,
            modified_time: c.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueItemListResponse {
    pub data: Vec<CatalogueItemResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueItemListQuery {
    pub catalogue_category_id: Option<String>,
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
