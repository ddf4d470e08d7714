//! Catalogue category service: Taxonomy Store (§4.1), Property Schema
//! Engine (§4.2), Property Propagation Coordinator (§4.3).

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use inventory_service_core::domains::category::{Breadcrumbs, CatalogueCategory};
use inventory_service_core::domains::property::{AllowedValues, Property, PropertyScalar, PropertyType};
use inventory_service_core::dto::category::{CategoryListQuery, CategoryPatchRequest, CategoryPostRequest};
use inventory_service_core::dto::common::PaginationInfo;
use inventory_service_core::dto::property::{PropertyPatchRequest, PropertyPostRequest};
use inventory_service_core::repositories::category::{CatalogueCategoryRepository, ParentFilter};
use inventory_service_core::repositories::dimension::UnitRepository;
use inventory_service_core::services::category::CatalogueCategoryService;
use inventory_service_core::{code, AppError, Result};
use shared_types::ObjectId;

pub struct CatalogueCategoryServiceImpl<R, U> {
    repository: R,
    units: U,
}

impl<R, U> CatalogueCategoryServiceImpl<R, U>
where
    R: CatalogueCategoryRepository,
    U: UnitRepository,
{
    pub fn new(repository: R, units: U) -> Self {
        Self { repository, units }
    }

    /// §4.2 standalone validation, run against every property submitted.
    fn validate_standalone(
        prop_type: PropertyType,
        unit_id: Option<ObjectId>,
        allowed_values: &Option<AllowedValues>,
    ) -> Result<()> {
        if prop_type == PropertyType::Boolean {
            if unit_id.is_some() {
                return Err(AppError::InvalidAction(
                    "unit not allowed for boolean".to_string(),
                ));
            }
            if allowed_values.is_some() {
                return Err(AppError::InvalidAction(
                    "allowed_values not allowed for boolean".to_string(),
                ));
            }
        }

        if let Some(AllowedValues::List { values }) = allowed_values {
            if values.is_empty() {
                return Err(AppError::InvalidAction(
                    "allowed_values.list.values must not be empty".to_string(),
                ));
            }
            for v in values {
                if v.type_of() != prop_type {
                    return Err(AppError::InvalidAction(
                        "allowed_values must only contain values of the same type".to_string(),
                    ));
                }
            }
            for (i, a) in values.iter().enumerate() {
                for b in &values[i + 1..] {
                    if a.eq_case_insensitive(b) {
                        return Err(AppError::InvalidAction(format!(
                            "contains a duplicate value: {a}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    async fn resolve_unit(&self, unit_id: Option<ObjectId>) -> Result<Option<String>> {
        match unit_id {
            None => Ok(None),
            Some(id) => {
                let unit = self
                    .units
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::Missing(format!("No unit found with ID: '{id}'")))?;
                Ok(Some(unit.value))
            }
        }
    }

    fn check_duplicate_name(existing: &[Property], name: &str, skip_id: Option<ObjectId>) -> Result<()> {
        let collides = existing
            .iter()
            .any(|p| p.name == name && Some(p.id) != skip_id);
        if collides {
            return Err(AppError::DuplicatePropertyName(format!(
                "Duplicate property name: {name}"
            )));
        }
        Ok(())
    }

    fn validate_default_value(
        mandatory: bool,
        prop_type: PropertyType,
        allowed_values: &Option<AllowedValues>,
        default_value: &Option<PropertyScalar>,
    ) -> Result<()> {
        match default_value {
            None => {
                if mandatory {
                    return Err(AppError::MissingMandatoryProperty(
                        "default_value cannot be None for a mandatory property".to_string(),
                    ));
                }
            }
            Some(v) => {
                if v.type_of() != prop_type {
                    return Err(AppError::InvalidPropertyType(format!(
                        "default_value must be of type {prop_type}"
                    )));
                }
                if let Some(AllowedValues::List { values }) = allowed_values {
                    if !values.iter().any(|allowed| allowed.matches(v)) {
                        let opts = values
                            .iter()
                            .map(|x| x.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        return Err(AppError::InvalidPropertyType(format!(
                            "Invalid default_value. Expected one of {opts}."
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<R, U> CatalogueCategoryService for CatalogueCategoryServiceImpl<R, U>
where
    R: CatalogueCategoryRepository,
    U: UnitRepository,
{
    async fn create_category(&self, request: CategoryPostRequest) -> Result<CatalogueCategory> {
        request.validate()?;

        if let Some(parent_id) = request.parent_id {
            let parent = self
                .repository
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::Missing(format!("No parent category found with ID: '{parent_id}'")))?;
            if parent.is_leaf {
                return Err(AppError::LeafParent(
                    "Cannot add children to a leaf parent category".to_string(),
                ));
            }
        }

        let generated_code = code(&request.name);
        if self
            .repository
            .find_by_parent_and_code(request.parent_id, &generated_code)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "A catalogue category with code '{generated_code}' already exists within the specified parent category"
            )));
        }

        let mut properties = Vec::with_capacity(request.properties.len());
        if request.is_leaf {
            for def in &request.properties {
                Self::validate_standalone(def.prop_type, def.unit_id, &def.allowed_values)?;
                Self::check_duplicate_name(&properties, &def.name, None)?;
                let unit = self.resolve_unit(def.unit_id).await?;
                properties.push(Property {
                    id: ObjectId::new(),
                    name: def.name.clone(),
                    prop_type: def.prop_type,
                    unit_id: def.unit_id,
                    unit,
                    mandatory: def.mandatory,
                    allowed_values: def.allowed_values.clone(),
                });
            }
        }

        let now = Utc::now();
        let category = CatalogueCategory {
            id: ObjectId::new(),
            name: request.name,
            code: generated_code,
            parent_id: request.parent_id,
            is_leaf: request.is_leaf,
            properties,
            created_time: now,
            modified_time: now,
        };

        self.repository.create(category).await
    }

    async fn get_category(&self, id: ObjectId) -> Result<CatalogueCategory> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No catalogue category found with ID: '{id}'")))
    }

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs> {
        self.repository.get_breadcrumbs(id).await
    }

    async fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> Result<(Vec<CatalogueCategory>, PaginationInfo)> {
        let filter = match query.parent_id.as_deref() {
            None => ParentFilter::Any,
            Some("null") => ParentFilter::Root,
            Some(raw) => match ObjectId::try_parse(raw) {
                Some(id) => ParentFilter::Under(id),
                None => return Ok((vec![], PaginationInfo::new(query.page, query.page_size, 0))),
            },
        };

        let (categories, total) = self.repository.list(filter, query.page, query.page_size).await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((categories, pagination))
    }

    async fn update_category(
        &self,
        id: ObjectId,
        patch: CategoryPatchRequest,
    ) -> Result<CatalogueCategory> {
        let mut category = self.get_category(id).await?;

        let touches_structure = patch.is_leaf.is_some() || patch.properties.is_some();
        if touches_structure {
            let has_children = self.repository.has_child_categories(id).await?
                || self.repository.has_child_catalogue_items(id).await?;
            if has_children {
                return Err(AppError::ChildrenExist(
                    "Cannot update is_leaf/properties on a catalogue category with children"
                        .to_string(),
                ));
            }
        }

        let mut moved = false;
        if let Some(new_parent) = patch.parent_id {
            if new_parent != category.parent_id {
                moved = true;
                if let Some(new_parent_id) = new_parent {
                    let parent = self
                        .repository
                        .find_by_id(new_parent_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::Missing(format!(
                                "No parent category found with ID: '{new_parent_id}'"
                            ))
                        })?;
                    if parent.is_leaf {
                        return Err(AppError::LeafParent(
                            "Cannot add children to a leaf parent category".to_string(),
                        ));
                    }
                    if self.repository.would_create_cycle(id, new_parent_id).await? {
                        return Err(AppError::InvalidAction(
                            "Cannot move a catalogue category to one of its own children"
                                .to_string(),
                        ));
                    }
                }
                category.parent_id = new_parent;
            }
        }

        if let Some(ref name) = patch.name {
            category.name = name.clone();
        }

        let name_or_parent_changed = patch.name.is_some() || moved;
        if name_or_parent_changed {
            let generated_code = code(&category.name);
            if let Some(existing) = self
                .repository
                .find_by_parent_and_code(category.parent_id, &generated_code)
                .await?
            {
                if existing.id != category.id {
                    return Err(AppError::Duplicate(format!(
                        "A catalogue category with code '{generated_code}' already exists within the specified parent category"
                    )));
                }
            }
            category.code = generated_code;
        }

        if let Some(is_leaf) = patch.is_leaf {
            category.is_leaf = is_leaf;
        }

        if let Some(defs) = patch.properties {
            if category.is_leaf {
                let mut properties = Vec::with_capacity(defs.len());
                for def in &defs {
                    Self::validate_standalone(def.prop_type, def.unit_id, &def.allowed_values)?;
                    Self::check_duplicate_name(&properties, &def.name, None)?;
                    let unit = self.resolve_unit(def.unit_id).await?;
                    properties.push(Property {
                        id: ObjectId::new(),
                        name: def.name.clone(),
                        prop_type: def.prop_type,
                        unit_id: def.unit_id,
                        unit,
                        mandatory: def.mandatory,
                        allowed_values: def.allowed_values.clone(),
                    });
                }
                category.properties = properties;
            }
            // Non-leaf: supplied properties are silently discarded (§9).
        }

        category.modified_time = Utc::now();
        self.repository.update(category).await
    }

    async fn delete_category(&self, id: ObjectId) -> Result<()> {
        let has_children = self.repository.has_child_categories(id).await?
            || self.repository.has_child_catalogue_items(id).await?;
        if has_children {
            return Err(AppError::ChildrenExist(
                "Cannot delete a catalogue category with children".to_string(),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!(
                "No catalogue category found with ID: '{id}'"
            )));
        }
        Ok(())
    }

    async fn add_property(
        &self,
        category_id: ObjectId,
        request: PropertyPostRequest,
    ) -> Result<CatalogueCategory> {
        let category = self.get_category(category_id).await?;
        if !category.is_leaf {
            return Err(AppError::NonLeafCategoryForItem(
                "Cannot add a property to a non-leaf catalogue category".to_string(),
            ));
        }

        Self::validate_standalone(request.prop_type, request.unit_id, &request.allowed_values)?;
        Self::check_duplicate_name(&category.properties, &request.name, None)?;
        Self::validate_default_value(
            request.mandatory,
            request.prop_type,
            &request.allowed_values,
            &request.default_value,
        )?;

        let unit = self.resolve_unit(request.unit_id).await?;
        let property = Property {
            id: ObjectId::new(),
            name: request.name,
            prop_type: request.prop_type,
            unit_id: request.unit_id,
            unit,
            mandatory: request.mandatory,
            allowed_values: request.allowed_values,
        };

        self.repository
            .add_property(category_id, property, request.default_value)
            .await
    }

    async fn update_property(
        &self,
        category_id: ObjectId,
        property_id: ObjectId,
        patch: PropertyPatchRequest,
    ) -> Result<CatalogueCategory> {
        let category = self.get_category(category_id).await?;
        let existing = category
            .properties
            .iter()
            .find(|p| p.id == property_id)
            .ok_or_else(|| {
                AppError::Missing(format!(
                    "No property found with ID: '{property_id}' in catalogue category '{category_id}'"
                ))
            })?
            .clone();

        let mut rename_occurred = false;
        let mut updated = existing.clone();

        if let Some(ref name) = patch.name {
            if *name != existing.name {
                Self::check_duplicate_name(&category.properties, name, Some(property_id))?;
                updated.name = name.clone();
                rename_occurred = true;
            }
        }

        if let Some(new_av) = patch.allowed_values {
            match (&existing.allowed_values, &new_av) {
                (None, Some(_)) => {
                    return Err(AppError::InvalidAction(
                        "cannot add allowed_values to existing property".to_string(),
                    ))
                }
                (Some(_), None) => {
                    return Err(AppError::InvalidAction(
                        "cannot remove allowed_values from existing property".to_string(),
                    ))
                }
                (Some(AllowedValues::List { values: old }), Some(AllowedValues::List { values: new })) => {
                    let is_superset = old
                        .iter()
                        .all(|o| new.iter().any(|n| n.eq_case_insensitive(o)));
                    if !is_superset {
                        return Err(AppError::InvalidAction(
                            "allowed_values.list.values must be a superset of the existing values"
                                .to_string(),
                        ));
                    }
                }
                (None, None) => {}
            }
            updated.allowed_values = new_av;
        }

        Self::validate_standalone(updated.prop_type, updated.unit_id, &updated.allowed_values)?;

        self.repository
            .update_property(category_id, updated, rename_occurred)
            .await
    }
}
