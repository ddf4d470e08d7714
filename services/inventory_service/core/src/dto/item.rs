//! Request/response payloads for items (§4.4).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;
use validator::Validate;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::domains::item::Item;
use crate::domains::property::PropertyValue;
use crate::dto::catalogue_item::PropertyValuePostRequest;
use crate::dto::common::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemPostRequest {
    pub catalogue_item_id: ObjectId,
    pub system_id: ObjectId,
    pub usage_status_id: ObjectId,
    pub purchase_order_number: Option<String>,
    pub warranty_end_date: Option<DateTime<Utc>>,
    pub asset_number: Option<String>,
    pub serial_number: Option<String>,
    pub delivered_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_defective: bool,
    pub notes: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyValuePostRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemPatchRequest {
    pub system_id: Option<ObjectId>,
    pub usage_status_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<Option<DateTime<Utc>>>,
    pub is_defective: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyValuePostRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemResponse {
    pub id: ObjectId,
    pub catalogue_item_id: ObjectId,
    pub system_id: ObjectId,
    pub usage_status_id: ObjectId,
    pub usage_status: String,
    pub purchase_order_number: Option<String>,
    pub warranty_end_date: Option<DateTime<Utc>>,
    pub asset_number: Option<String>,
    pub serial_number: Option<String>,
    pub delivered_date: Option<DateTime<Utc>>,
    pub is_defective: bool,
    pub notes: Option<String>,
    pub properties: Vec<PropertyValue>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            catalogue_item_id: i.catalogue_item_id,
            system_id: i.system_id,
            usage_status_id: i.usage_status_id,
            usage_status: i.usage_status,
            purchase_order_number: i.purchase_order_number,
            warranty_end_date: i.warranty_end_date,
            asset_number: i.asset_number,
            serial_number: i.serial_number,
            delivered_date: i.delivered_date,
            is_defective: i.is_defective,
            notes: i.notes,
            properties: i.properties,
            created_time: i.created_time,
            modified_time: i.modified_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemListResponse {
    pub data: Vec<ItemResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemListQuery {
    pub catalogue_item_id: Option<String>,
    pub system_id: Option<String>,
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
