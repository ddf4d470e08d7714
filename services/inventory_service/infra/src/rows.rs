//! Row types mirroring table shape, plus the conversions into domain
//! entities. Property lists are stored as JSONB and decoded through serde.

use chrono::{DateTime, Utc};
use inventory_service_core::domains::catalogue_item::CatalogueItem;
use inventory_service_core::domains::category::CatalogueCategory;
use inventory_service_core::domains::dimension::{Manufacturer, Unit, UsageStatus};
use inventory_service_core::domains::item::Item;
use inventory_service_core::domains::property::{Property, PropertyValue};
use inventory_service_core::domains::system::{Importance, System};
use inventory_service_core::AppError;
use shared_types::ObjectId;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct CatalogueCategoryRow {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub is_leaf: bool,
    pub properties: serde_json::Value,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl TryFrom<CatalogueCategoryRow> for CatalogueCategory {
    type Error = AppError;

    fn try_from(row: CatalogueCategoryRow) -> Result<Self, Self::Error> {
        let properties: Vec<Property> = serde_json::from_value(row.properties)
            .map_err(|e| AppError::DatabaseIntegrity(format!("malformed properties JSON: {e}")))?;
        Ok(CatalogueCategory {
            id: row.id,
            name: row.name,
            code: row.code,
            parent_id: row.parent_id,
            is_leaf: row.is_leaf,
            properties,
            created_time: row.created_time,
            modified_time: row.modified_time,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct CatalogueItemRow {
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
    pub properties: serde_json::Value,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl TryFrom<CatalogueItemRow> for CatalogueItem {
    type Error = AppError;

    fn try_from(row: CatalogueItemRow) -> Result<Self, Self::Error> {
        let properties: Vec<PropertyValue> = serde_json::from_value(row.properties)
            .map_err(|e| AppError::DatabaseIntegrity(format!("malformed properties JSON: {e}")))?;
        Ok(CatalogueItem {
            id: row.id,
            catalogue_category_id: row.catalogue_category_id,
            manufacturer_id: row.manufacturer_id,
            name: row.name,
            description: row.description,
            cost_gbp: row.cost_gbp,
            cost_to_rework_gbp: row.cost_to_rework_gbp,
            days_to_replace: row.days_to_replace,
            days_to_rework: row.days_to_rework,
            drawing_number: row.drawing_number,
            drawing_link: row.drawing_link,
            item_model_number: row.item_model_number,
            notes: row.notes,
            is_obsolete: row.is_obsolete,
            obsolete_reason: row.obsolete_reason,
            obsolete_replacement_catalogue_item_id: row.obsolete_replacement_catalogue_item_id,
            properties,
            created_time: row.created_time,
            modified_time: row.modified_time,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct ItemRow {
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
    pub properties: serde_json::Value,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = AppError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let properties: Vec<PropertyValue> = serde_json::from_value(row.properties)
            .map_err(|e| AppError::DatabaseIntegrity(format!("malformed properties JSON: {e}")))?;
        Ok(Item {
            id: row.id,
            catalogue_item_id: row.catalogue_item_id,
            system_id: row.system_id,
            usage_status_id: row.usage_status_id,
            usage_status: row.usage_status,
            purchase_order_number: row.purchase_order_number,
            warranty_end_date: row.warranty_end_date,
            asset_number: row.asset_number,
            serial_number: row.serial_number,
            delivered_date: row.delivered_date,
            is_defective: row.is_defective,
            notes: row.notes,
            properties,
            created_time: row.created_time,
            modified_time: row.modified_time,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct SystemRow {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub importance: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl TryFrom<SystemRow> for System {
    type Error = AppError;

    fn try_from(row: SystemRow) -> Result<Self, Self::Error> {
        let importance = match row.importance.as_str() {
            "low" => Importance::Low,
            "medium" => Importance::Medium,
            "high" => Importance::High,
            other => {
                return Err(AppError::DatabaseIntegrity(format!(
                    "unrecognized importance value: {other}"
                )))
            }
        };
        Ok(System {
            id: row.id,
            name: row.name,
            code: row.code,
            parent_id: row.parent_id,
            importance,
            description: row.description,
            location: row.location,
            owner: row.owner,
            created_time: row.created_time,
            modified_time: row.modified_time,
        })
    }
}

pub fn importance_as_str(importance: Importance) -> &'static str {
    match importance {
        Importance::Low => "low",
        Importance::Medium => "medium",
        Importance::High => "high",
    }
}

#[derive(Debug, FromRow)]
pub struct UnitRow {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Unit {
            id: row.id,
            value: row.value,
            code: row.code,
            created_time: row.created_time,
            modified_time: row.modified_time,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct UsageStatusRow {
    pub id: ObjectId,
    pub value: String,
    pub code: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<UsageStatusRow> for UsageStatus {
    fn from(row: UsageStatusRow) -> Self {
        UsageStatus {
            id: row.id,
            value: row.value,
            code: row.code,
            created_time: row.created_time,
            modified_time: row.modified_time,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ManufacturerRow {
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

impl From<ManufacturerRow> for Manufacturer {
    fn from(row: ManufacturerRow) -> Self {
        Manufacturer {
            id: row.id,
            name: row.name,
            code: row.code,
            url: row.url,
            address_building_number: row.address_building_number,
            address_street_name: row.address_street_name,
            address_town: row.address_town,
            address_county: row.address_county,
            address_country: row.address_country,
            address_postcode: row.address_postcode,
            telephone: row.telephone,
            created_time: row.created_time,
            modified_time: row.modified_time,
        }
    }
}
