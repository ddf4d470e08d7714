//! Services for the dimension entities: Unit, UsageStatus, Manufacturer
//! (§4.6 referential guard).

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use inventory_service_core::domains::dimension::{Manufacturer, Unit, UsageStatus};
use inventory_service_core::dto::common::PaginationInfo;
use inventory_service_core::dto::dimension::{
    DimensionListQuery, ManufacturerPatchRequest, ManufacturerPostRequest, UnitPostRequest,
    UsageStatusPostRequest,
};
use inventory_service_core::repositories::dimension::{
    ManufacturerRepository, UnitRepository, UsageStatusRepository,
};
use inventory_service_core::services::dimension::{ManufacturerService, UnitService, UsageStatusService};
use inventory_service_core::{code, AppError, Result};
use shared_types::ObjectId;

pub struct UnitServiceImpl<R> {
    repository: R,
}

impl<R> UnitServiceImpl<R>
where
    R: UnitRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UnitService for UnitServiceImpl<R>
where
    R: UnitRepository,
{
    async fn create_unit(&self, request: UnitPostRequest) -> Result<Unit> {
        request.validate()?;

        let generated_code = code(&request.value);
        if self.repository.find_by_code(&generated_code).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "A unit with code '{generated_code}' already exists"
            )));
        }

        let now = Utc::now();
        let unit = Unit {
            id: ObjectId::new(),
            value: request.value,
            code: generated_code,
            created_time: now,
            modified_time: now,
        };
        self.repository.create(unit).await
    }

    async fn get_unit(&self, id: ObjectId) -> Result<Unit> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No unit found with ID: '{id}'")))
    }

    async fn list_units(&self, query: DimensionListQuery) -> Result<(Vec<Unit>, PaginationInfo)> {
        let (units, total) = self.repository.list(query.page, query.page_size).await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((units, pagination))
    }

    async fn delete_unit(&self, id: ObjectId) -> Result<()> {
        if self.repository.is_referenced_by_any_category(id).await? {
            return Err(AppError::PartOf(
                "The specified unit is part of a Catalogue category".to_string(),
            ));
        }
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No unit found with ID: '{id}'")));
        }
        Ok(())
    }
}

pub struct UsageStatusServiceImpl<R> {
    repository: R,
}

impl<R> UsageStatusServiceImpl<R>
where
    R: UsageStatusRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UsageStatusService for UsageStatusServiceImpl<R>
where
    R: UsageStatusRepository,
{
    async fn create_usage_status(&self, request: UsageStatusPostRequest) -> Result<UsageStatus> {
        request.validate()?;

        let generated_code = code(&request.value);
        if self.repository.find_by_code(&generated_code).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "A usage status with code '{generated_code}' already exists"
            )));
        }

        let now = Utc::now();
        let status = UsageStatus {
            id: ObjectId::new(),
            value: request.value,
            code: generated_code,
            created_time: now,
            modified_time: now,
        };
        self.repository.create(status).await
    }

    async fn get_usage_status(&self, id: ObjectId) -> Result<UsageStatus> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No usage status found with ID: '{id}'")))
    }

    async fn list_usage_statuses(
        &self,
        query: DimensionListQuery,
    ) -> Result<(Vec<UsageStatus>, PaginationInfo)> {
        let (statuses, total) = self.repository.list(query.page, query.page_size).await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((statuses, pagination))
    }

    async fn delete_usage_status(&self, id: ObjectId) -> Result<()> {
        if self.repository.is_referenced_by_any_item(id).await? {
            return Err(AppError::PartOf(
                "The specified usage status is part of an Item".to_string(),
            ));
        }
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No usage status found with ID: '{id}'")));
        }
        Ok(())
    }
}

pub struct ManufacturerServiceImpl<R> {
    repository: R,
}

impl<R> ManufacturerServiceImpl<R>
where
    R: ManufacturerRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManufacturerService for ManufacturerServiceImpl<R>
where
    R: ManufacturerRepository,
{
    async fn create_manufacturer(&self, request: ManufacturerPostRequest) -> Result<Manufacturer> {
        request.validate()?;

        let generated_code = code(&request.name);
        if self.repository.find_by_code(&generated_code).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "A manufacturer with code '{generated_code}' already exists"
            )));
        }

        let now = Utc::now();
        let manufacturer = Manufacturer {
            id: ObjectId::new(),
            name: request.name,
            code: generated_code,
            url: request.url,
            address_building_number: request.address_building_number,
            address_street_name: request.address_street_name,
            address_town: request.address_town,
            address_county: request.address_county,
            address_country: request.address_country,
            address_postcode: request.address_postcode,
            telephone: request.telephone,
            created_time: now,
            modified_time: now,
        };
        self.repository.create(manufacturer).await
    }

    async fn get_manufacturer(&self, id: ObjectId) -> Result<Manufacturer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Missing(format!("No manufacturer found with ID: '{id}'")))
    }

    async fn list_manufacturers(
        &self,
        query: DimensionListQuery,
    ) -> Result<(Vec<Manufacturer>, PaginationInfo)> {
        let (manufacturers, total) = self.repository.list(query.page, query.page_size).await?;
        let pagination = PaginationInfo::new(query.page, query.page_size, total.max(0) as u64);
        Ok((manufacturers, pagination))
    }

    async fn update_manufacturer(
        &self,
        id: ObjectId,
        patch: ManufacturerPatchRequest,
    ) -> Result<Manufacturer> {
        patch.validate()?;
        let mut manufacturer = self.get_manufacturer(id).await?;

        if let Some(ref name) = patch.name {
            manufacturer.name = name.clone();
            let generated_code = code(name);
            if let Some(existing) = self.repository.find_by_code(&generated_code).await? {
                if existing.id != manufacturer.id {
                    return Err(AppError::Duplicate(format!(
                        "A manufacturer with code '{generated_code}' already exists"
                    )));
                }
            }
            manufacturer.code = generated_code;
        }
        if let Some(url) = patch.url {
            manufacturer.url = Some(url);
        }
        if let Some(address_building_number) = patch.address_building_number {
            manufacturer.address_building_number = Some(address_building_number);
        }
        if let Some(address_street_name) = patch.address_street_name {
            manufacturer.address_street_name = Some(address_street_name);
        }
        if let Some(address_town) = patch.address_town {
            manufacturer.address_town = Some(address_town);
        }
        if let Some(address_county) = patch.address_county {
            manufacturer.address_county = Some(address_county);
        }
        if let Some(address_country) = patch.address_country {
            manufacturer.address_country = Some(address_country);
        }
        if let Some(address_postcode) = patch.address_postcode {
            manufacturer.address_postcode = Some(address_postcode);
        }
        if let Some(telephone) = patch.telephone {
            manufacturer.telephone = Some(telephone);
        }

        manufacturer.modified_time = Utc::now();
        self.repository.update(manufacturer).await
    }

    async fn delete_manufacturer(&self, id: ObjectId) -> Result<()> {
        if self.repository.is_referenced_by_any_catalogue_item(id).await? {
            return Err(AppError::PartOf(
                "The specified manufacturer is a part of a catalogue item".to_string(),
            ));
        }
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::Missing(format!("No manufacturer found with ID: '{id}'")));
        }
        Ok(())
    }
}
