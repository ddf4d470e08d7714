//! Item domain entity — a physical instance of a catalogue item, placed in
//! a system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::property::PropertyValue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Item {
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
    /// Overrides of the parent catalogue item's property values; unsupplied
    /// properties are inherited at read time (§4.4), one layer deep.
    pub properties: Vec<PropertyValue>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

/// Merges an item's property overrides on top of the parent catalogue
/// item's values. Matching is by property `id`; values present on the item
/// win, everything else is inherited unchanged.
pub fn resolve_effective_properties(
    catalogue_item_properties: &[PropertyValue],
    item_overrides: &[PropertyValue],
) -> Vec<PropertyValue> {
    catalogue_item_properties
        .iter()
        .map(|base| {
            item_overrides
                .iter()
                .find(|ov| ov.id == base.id)
                .cloned()
                .unwrap_or_else(|| base.clone())
        })
        .collect()
}
