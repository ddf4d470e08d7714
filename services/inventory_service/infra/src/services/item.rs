//! Item service: Instance Validator (§4.4) for physical items, plus
//! one-layer inheritance resolution at read time.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use inventory_service_core::domains::item::{resolve_effective_properties, Item};
use inventory_service_core::domains::property::{Property, PropertyValue};
use inventory_service_core::dto::catalogue_item::PropertyValuePostRequest;
use inventory_service_core::dto::common::PaginationInfo;
use inventory_service_core::dto::item::{ItemListQuery, ItemPatchRequest, ItemPostRequest};
use inventory_service_core::repositories::catalogue_item::CatalogueItemRepository;
use inventory_service_core::repositories::category::CatalogueCategoryRepository;
use inventory_service_core::repositories::dimension::UsageStatusRepository;
use inventory_service_core::repositories::item::ItemRepository;
use inventory_service_core::repositories::system::SystemRepository;
use inventory_service_core::services::item::ItemService;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;

pub struct ItemServiceImpl<R, CI, CC, S, U> {
    repository: R,
    catalogue_items: CI,
    categories: CC,
    systems: S,
    usage_statuses: U,
}

impl<R, CI, CC, S, U> ItemServiceImpl<R, CI, CC, S, U>
where
    R: ItemRepository,
    CI: CatalogueItemRepository,
    CC: CatalogueCategoryRepository,
    S: SystemRepository,
    U: UsageStatusRepository,
{
    pub fn new(repository: R, catalogue_items: CI, categories: CC, systems: S, usage_statuses: U) -> Self {
        Self {
            repository,
            catalogue_items,
            categories,
            systems,
            usage_statuses,
        }
    }

    /// Validates supplied overrides against the governing schema. Unlike
    /// catalogue-item validation, a mandatory property with no supplied
    /// override is not rejected — it is satisfied by inheritance from the
    /// parent catalogue item at read time. An override explicitly supplied
    /// as `null`, however, is not an omission and is rejected the same way
    /// catalogue-item validation rejects it. Unrecognized ids are dropped.
    fn validate_overrides(schema: &[Property], supplied: &[PropertyValuePostRequest]) -> Result<Vec<PropertyValue>> {
        let mut out = Vec::new();
        for s in supplied {
            let Some(p) = schema.iter().find(|p| p.id == s.id) else {
                continue;
            };
            if let Some(ref v) = s.value {
                if v.type_of() != p.prop_type {
                    return Err(AppError::InvalidPropertyType(format!(
                        "Invalid value for property with ID '{}'. Must be of type {}.",
                        p.id, p.prop_type
                    )));
                }
                if let Some(ref allowed) = p.allowed_values {
                    let values = allowed.values();
                    if !values.iter().any(|a| a.matches(v)) {
                        let opts = values
                            .iter()
                            .map(|x| x.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        return Err(AppError::InvalidPropertyType(format!(
                            "Invalid value for property with ID '{}'. Expected one of {opts}.",
                            p.id
                        )));
                    }
                }
            } else if p.mandatory {
                return Err(AppError::MissingMandatoryProperty(format!(
                    "Mandatory property with ID '{}' cannot be None.",
                    p.id
                )));
            }
            out.push(PropertyValue {
                id: p.id,
                name: p.name.clone(),
                unit_id: p.unit_id,
                unit: p.unit.clone(),
                value: s.value.clone(),
            });
        }
        Ok(out)
    }

    async fn schema_for_catalogue_item(&self, catalogue_item_id: ObjectId) -> Result<Vec<Property>> {
        let catalogue_item = self
            .catalogue_items
            .find_by_id(catalogue_item_id)
            .await?
            .ok_or_else(|| {
                AppError::Missing(format!("No catalogue item found with ID: '{catalogue_item_id}'"))
            })?;
        let category = self
            .categories
            .find_by_id(catalogue_item.catalogue_category_id)
            .await?
            .ok_or_else(|| AppError::DatabaseIntegrity("catalogue item references a missing category".to_string()))?;
        Ok(category.properties)
    }

    /// Merges the item's overrides onto its parent catalogue item's
    /// property values for the read path (§4.4 inheritance).
    async fn with_effective_properties(&self, mut item: Item) -> Result<Item> {
        let catalogue_item = self
            .catalogue_items
            .find_by_id(item.catalogue_item_id)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseIntegrity("item references a missing catalogue item".to_string())
            })?;
        item.properties = resolve_effective_properties(&catalogue_item.properties, &item.properties);
        Ok(item)
    }
}

#[async_trait]
impl<R, CI, CC, S, U> ItemService for ItemServiceImpl<R, CI, CC, S, U>
where
    R: ItemRepository,
    CI: CatalogueItemRepository,
    CC: CatalogueCategoryRepository,
    S: SystemRepository,
    U: UsageStatusRepository,
{
    async fn create_item(&self, request: ItemPostRequest) -> Result<Item> {
        request.validate()?;

        self.systems
            .find_by_id(request.system_id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No system found with ID: '{}'", request.system_id)))?;
        let usage_status = self
            .usage_statuses
            .find_by_id(request.usage_status_id)
            .await?
            .ok_or_else(|| {
                AppError::Missing(format!("No usage status found with ID: '{}'", request.usage_status_id))
            })?;

        let schema = self.schema_for_catalogue_item(request.catalogue_item_id).await?;
        let properties = Self::validate_overrides(&schema, &request.properties)?;

        let now = Utc::now();
        let item = Item {
            id: ObjectId::new(),
            catalogue_item_id: request.catalogue_item_id,
            system_id: request.system_id,
            usage_status_id: request.usage_status_id,
            usage_status: usage_status.value,
            purchase_order_number: request.purchase_order_number,
            warranty_end_date: request.warranty_end_date,
            asset_number: request.asset_number,
            serial_number: request.serial_number,
            delivered_date: request.delivered_date,
            is_defective: request.is_defective,
            notes: request.notes,
            properties,
            created_time: now,
            modified_time: now,
        };

        self.repository.create(item).await
    }

    async fn get_item(&self, id: ObjectId) -> Result<Item> {
        let item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No item found with ID: '{id}'")))?;
        self.with_effective_properties(item).await
    }

    async fn list_items(&self, query: ItemListQuery) -> Result<(Vec<Item>, PaginationInfo)> {
        let catalogue_item_id = match query.catalogue_item_id.as_deref() {
            None => None,
            Some(raw) => match ObjectId::try_parse(raw) {
                Some(id) => Some(id),
                None => return Ok((vec![], PaginationInfo::new(query.page, query.page_size, 0))),
            },
        };
        let system_id = match query.system_id.as_deref() {
            None => None,
            Some(raw) => match ObjectId::try_parse(raw) {
                Some(id) => Some(id),
                None => return Ok((vec![], PaginationInfo::new(query.page, query.page_size, 0))),
            },
        };

        let (items, total) = self
            .repository
            .list(catalogue_item_id, system_id, query.page, query.page_size)
            .await?;
        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            resolved.push(self.with_effective_properties(item).await?);
        }
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((resolved, pagination))
    }

    async fn update_item(&self, id: ObjectId, patch: ItemPatchRequest) -> Result<Item> {
        patch.validate()?;
        let mut item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No item found with ID: '{id}'")))?;

        if let Some(system_id) = patch.system_id {
            self.systems
                .find_by_id(system_id)
                .await?
                .ok_or_else(|| AppError::Missing(format!("No system found with ID: '{system_id}'")))?;
            item.system_id = system_id;
        }
        if let Some(usage_status_id) = patch.usage_status_id {
            let usage_status = self
                .usage_statuses
                .find_by_id(usage_status_id)
                .await?
                .ok_or_else(|| {
                    AppError::Missing(format!("No usage status found with ID: '{usage_status_id}'"))
                })?;
            item.usage_status_id = usage_status_id;
            item.usage_status = usage_status.value;
        }
        if let Some(purchase_order_number) = patch.purchase_order_number {
            item.purchase_order_number = purchase_order_number;
        }
        if let Some(warranty_end_date) = patch.warranty_end_date {
            item.warranty_end_date = warranty_end_date;
        }
        if let Some(asset_number) = patch.asset_number {
            item.asset_number = asset_number;
        }
        if let Some(serial_number) = patch.serial_number {
            item.serial_number = serial_number;
        }
        if let Some(delivered_date) = patch.delivered_date {
            item.delivered_date = delivered_date;
        }
        if let Some(is_defective) = patch.is_defective {
            item.is_defective = is_defective;
        }
        if let Some(notes) = patch.notes {
            item.notes = notes;
        }
        if let Some(supplied) = patch.properties {
            let schema = self.schema_for_catalogue_item(item.catalogue_item_id).await?;
            item.properties = Self::validate_overrides(&schema, &supplied)?;
        }

        item.modified_time = Utc::now();
        let updated = self.repository.update(item).await?;
        self.with_effective_properties(updated).await
    }

    async fn delete_item(&self, id: ObjectId) -> Result<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No item found with ID: '{id}'")));
        }
        Ok(())
    }
}
