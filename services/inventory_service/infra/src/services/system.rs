//! System service: Taxonomy Store (§4.1) mirrored for the system tree,
//! minus the property schema.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use inventory_service_core::domains::category::Breadcrumbs;
use inventory_service_core::domains::system::System;
use inventory_service_core::dto::common::PaginationInfo;
use inventory_service_core::dto::system::{SystemListQuery, SystemPatchRequest, SystemPostRequest};
use inventory_service_core::repositories::category::ParentFilter;
use inventory_service_core::repositories::system::SystemRepository;
use inventory_service_core::services::system::SystemService;
use inventory_service_core::{code, AppError, Result};
use shared_types::ObjectId;

pub struct SystemServiceImpl<R> {
    repository: R,
}

impl<R> SystemServiceImpl<R>
where
    R: SystemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SystemService for SystemServiceImpl<R>
where
    R: SystemRepository,
{
    async fn create_system(&self, request: SystemPostRequest) -> Result<System> {
        request.validate()?;

        if let Some(parent_id) = request.parent_id {
            self.repository
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::Missing(format!("No parent system found with ID: '{parent_id}'")))?;
        }

        let generated_code = code(&request.name);
        if self
            .repository
            .find_by_parent_and_code(request.parent_id, &generated_code)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "A system with code '{generated_code}' already exists within the specified parent system"
            )));
        }

        let now = Utc::now();
        let system = System {
            id: ObjectId::new(),
            name: request.name,
            code: generated_code,
            parent_id: request.parent_id,
            importance: request.importance,
            description: request.description,
            location: request.location,
            owner: request.owner,
            created_time: now,
            modified_time: now,
        };

        self.repository.create(system).await
    }

    async fn get_system(&self, id: ObjectId) -> Result<System> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No system found with ID: '{id}'")))
    }

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs> {
        self.repository.get_breadcrumbs(id).await
    }

    async fn list_systems(&self, query: SystemListQuery) -> Result<(Vec<System>, PaginationInfo)> {
        let filter = match query.parent_id.as_deref() {
            None => ParentFilter::Any,
            Some("null") => ParentFilter::Root,
            Some(raw) => match ObjectId::try_parse(raw) {
                Some(id) => ParentFilter::Under(id),
                None => return Ok((vec![], PaginationInfo::new(query.page, query.page_size, 0))),
            },
        };

        let (systems, total) = self.repository.list(filter, query.page, query.page_size).await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((systems, pagination))
    }

    async fn update_system(&self, id: ObjectId, patch: SystemPatchRequest) -> Result<System> {
        patch.validate()?;
        let mut system = self.get_system(id).await?;

        let mut moved = false;
        if let Some(new_parent) = patch.parent_id {
            if new_parent != system.parent_id {
                moved = true;
                if let Some(new_parent_id) = new_parent {
                    self.repository
                        .find_by_id(new_parent_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::Missing(format!("No parent system found with ID: '{new_parent_id}'"))
                        })?;
                    if self.repository.would_create_cycle(id, new_parent_id).await? {
                        return Err(AppError::InvalidAction(
                            "Cannot move a system to one of its own children".to_string(),
                        ));
                    }
                }
                system.parent_id = new_parent;
            }
        }

        if let Some(ref name) = patch.name {
            system.name = name.clone();
        }

        let name_or_parent_changed = patch.name.is_some() || moved;
        if name_or_parent_changed {
            let generated_code = code(&system.name);
            if let Some(existing) = self
                .repository
                .find_by_parent_and_code(system.parent_id, &generated_code)
                .await?
            {
                if existing.id != system.id {
                    return Err(AppError::Duplicate(format!(
                        "A system with code '{generated_code}' already exists within the specified parent system"
                    )));
                }
            }
            system.code = generated_code;
        }

        if let Some(importance) = patch.importance {
            system.importance = importance;
        }
        if let Some(description) = patch.description {
            system.description = description;
        }
        if let Some(location) = patch.location {
            system.location = location;
        }
        if let Some(owner) = patch.owner {
            system.owner = owner;
        }

        system.modified_time = Utc::now();
        self.repository.update(system).await
    }

    async fn delete_system(&self, id: ObjectId) -> Result<()> {
        let has_children =
            self.repository.has_child_systems(id).await? || self.repository.has_child_items(id).await?;
        if has_children {
            return Err(AppError::ChildrenExist(
                "Cannot delete a system with children".to_string(),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No system found with ID: '{id}'")));
        }
        Ok(())
    }
}
