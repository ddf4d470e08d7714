//! Catalogue item service: Instance Validator (§4.4) for catalogue items.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use inventory_service_core::domains::catalogue_item::CatalogueItem;
use inventory_service_core::domains::property::{Property, PropertyValue};
use inventory_service_core::dto::catalogue_item::{
    CatalogueItemListQuery, CatalogueItemPatchRequest, CatalogueItemPostRequest, PropertyValuePostRequest,
};
use inventory_service_core::dto::common::PaginationInfo;
use inventory_service_core::repositories::catalogue_item::CatalogueItemRepository;
use inventory_service_core::repositories::category::CatalogueCategoryRepository;
use inventory_service_core::repositories::dimension::ManufacturerRepository;
use inventory_service_core::services::catalogue_item::CatalogueItemService;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;

pub struct CatalogueItemServiceImpl<R, C, M> {
    repository: R,
    categories: C,
    manufacturers: M,
}

impl<R, C, M> CatalogueItemServiceImpl<R, C, M>
where
    R: CatalogueItemRepository,
    C: CatalogueCategoryRepository,
    M: ManufacturerRepository,
{
    pub fn new(repository: R, categories: C, manufacturers: M) -> Self {
        Self {
            repository,
            categories,
            manufacturers,
        }
    }

    fn validate_properties(
        schema: &[Property],
        supplied: &[PropertyValuePostRequest],
    ) -> Result<Vec<PropertyValue>> {
        let mut out = Vec::with_capacity(schema.len());
        for p in schema {
            let found = supplied.iter().find(|s| s.id == p.id);
            let value = found.and_then(|s| s.value.clone());

            if p.mandatory {
                match found {
                    None => {
                        return Err(AppError::MissingMandatoryProperty(format!(
                            "Missing mandatory property with ID: '{}'",
                            p.id
                        )));
                    }
                    Some(s) if s.value.is_none() => {
                        return Err(AppError::MissingMandatoryProperty(format!(
                            "Mandatory property with ID '{}' cannot be None.",
                            p.id
                        )));
                    }
                    _ => {}
                }
            }

            if let Some(ref v) = value {
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
            }

            out.push(PropertyValue {
                id: p.id,
                name: p.name.clone(),
                unit_id: p.unit_id,
                unit: p.unit.clone(),
                value,
            });
        }
        Ok(out)
    }

    async fn category_schema(&self, category_id: ObjectId) -> Result<Vec<Property>> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::Missing(format!("No catalogue category found with ID: '{category_id}'"))
            })?;
        if !category.is_leaf {
            return Err(AppError::NonLeafCategoryForItem(
                "Cannot add a catalogue item to a non-leaf catalogue category".to_string(),
            ));
        }
        Ok(category.properties)
    }
}

#[async_trait]
impl<R, C, M> CatalogueItemService for CatalogueItemServiceImpl<R, C, M>
where
    R: CatalogueItemRepository,
    C: CatalogueCategoryRepository,
    M: ManufacturerRepository,
{
    async fn create_catalogue_item(
        &self,
        request: CatalogueItemPostRequest,
    ) -> Result<CatalogueItem> {
        request.validate()?;

        self.manufacturers
            .find_by_id(request.manufacturer_id)
            .await?
            .ok_or_else(|| {
                AppError::Missing(format!(
                    "No manufacturer found with ID: '{}'",
                    request.manufacturer_id
                ))
            })?;

        let schema = self.category_schema(request.catalogue_category_id).await?;
        let properties = Self::validate_properties(&schema, &request.properties)?;

        let now = Utc::now();
        let item = CatalogueItem {
            id: ObjectId::new(),
            catalogue_category_id: request.catalogue_category_id,
            manufacturer_id: request.manufacturer_id,
            name: request.name,
            description: request.description,
            cost_gbp: request.cost_gbp,
            cost_to_rework_gbp: request.cost_to_rework_gbp,
            days_to_replace: request.days_to_replace,
            days_to_rework: request.days_to_rework,
            drawing_number: request.drawing_number,
            drawing_link: request.drawing_link,
            item_model_number: request.item_model_number,
            notes: request.notes,
            is_obsolete: request.is_obsolete,
            obsolete_reason: request.obsolete_reason,
            obsolete_replacement_catalogue_item_id: request.obsolete_replacement_catalogue_item_id,
            properties,
            created_time: now,
            modified_time: now,
        };

        self.repository.create(item).await
    }

    async fn get_catalogue_item(&self, id: ObjectId) -> Result<CatalogueItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No catalogue item found with ID: '{id}'")))
    }

    async fn list_catalogue_items(
        &self,
        query: CatalogueItemListQuery,
    ) -> Result<(Vec<CatalogueItem>, PaginationInfo)> {
        let category_id = match query.catalogue_category_id.as_deref() {
            None => None,
            Some(raw) => match ObjectId::try_parse(raw) {
                Some(id) => Some(id),
                None => return Ok((vec![], PaginationInfo::new(query.page, query.page_size, 0))),
            },
        };

        let (items, total) = self
            .repository
            .list(category_id, query.page, query.page_size)
            .await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((items, pagination))
    }

    async fn update_catalogue_item(
        &self,
        id: ObjectId,
        patch: CatalogueItemPatchRequest,
    ) -> Result<CatalogueItem> {
        patch.validate()?;
        let mut item = self.get_catalogue_item(id).await?;

        let has_items = self.repository.has_items(id).await?;
        let changes_locked_field = patch.manufacturer_id.is_some()
            || patch.catalogue_category_id.is_some()
            || patch.properties.is_some();
        if has_items && changes_locked_field {
            return Err(AppError::InvalidAction(
                "Cannot change manufacturer_id, catalogue_category_id, or properties on a \
                 catalogue item with items"
                    .to_string(),
            ));
        }

        if let Some(manufacturer_id) = patch.manufacturer_id {
            self.manufacturers
                .find_by_id(manufacturer_id)
                .await?
                .ok_or_else(|| {
                    AppError::Missing(format!("No manufacturer found with ID: '{manufacturer_id}'"))
                })?;
            item.manufacturer_id = manufacturer_id;
        }

        if let Some(new_category_id) = patch.catalogue_category_id {
            if new_category_id != item.catalogue_category_id {
                let new_schema = self.category_schema(new_category_id).await?;
                let old_schema = self.category_schema(item.catalogue_category_id).await?;
                let old_ids: Vec<ObjectId> = old_schema.iter().map(|p| p.id).collect();
                let new_ids: Vec<ObjectId> = new_schema.iter().map(|p| p.id).collect();

                let properties = match patch.properties.clone() {
                    Some(supplied) => Self::validate_properties(&new_schema, &supplied)?,
                    None if old_ids == new_ids => item.properties.clone(),
                    None => {
                        return Err(AppError::InvalidAction(
                            "Cannot move catalogue item to a category with different properties \
                             without specifying the new properties"
                                .to_string(),
                        ))
                    }
                };

                item.catalogue_category_id = new_category_id;
                item.properties = properties;
            }
        } else if let Some(supplied) = patch.properties {
            let schema = self.category_schema(item.catalogue_category_id).await?;
            item.properties = Self::validate_properties(&schema, &supplied)?;
        }

        if let Some(ref name) = patch.name {
            item.name = name.clone();
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(cost_gbp) = patch.cost_gbp {
            item.cost_gbp = cost_gbp;
        }
        if let Some(cost_to_rework_gbp) = patch.cost_to_rework_gbp {
            item.cost_to_rework_gbp = cost_to_rework_gbp;
        }
        if let Some(days_to_replace) = patch.days_to_replace {
            item.days_to_replace = days_to_replace;
        }
        if let Some(days_to_rework) = patch.days_to_rework {
            item.days_to_rework = days_to_rework;
        }
        if let Some(drawing_number) = patch.drawing_number {
            item.drawing_number = drawing_number;
        }
        if let Some(drawing_link) = patch.drawing_link {
            item.drawing_link = drawing_link;
        }
        if let Some(item_model_number) = patch.item_model_number {
            item.item_model_number = item_model_number;
        }
        if let Some(notes) = patch.notes {
            item.notes = notes;
        }
        if let Some(is_obsolete) = patch.is_obsolete {
            item.is_obsolete = is_obsolete;
        }
        if let Some(obsolete_reason) = patch.obsolete_reason {
            item.obsolete_reason = obsolete_reason;
        }
        if let Some(replacement) = patch.obsolete_replacement_catalogue_item_id {
            item.obsolete_replacement_catalogue_item_id = replacement;
        }

        item.modified_time = Utc::now();
        self.repository.update(item).await
    }

    async fn delete_catalogue_item(&self, id: ObjectId) -> Result<()> {
        if self.repository.has_items(id).await? {
            return Err(AppError::ChildrenExist(
                "Cannot delete a catalogue item with items".to_string(),
            ));
        }
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No catalogue item found with ID: '{id}'")));
        }
        Ok(())
    }
}
