//! Catalogue item domain entity — a stock-keeping unit living in a leaf
//! catalogue category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::property::PropertyValue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueItem {
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
