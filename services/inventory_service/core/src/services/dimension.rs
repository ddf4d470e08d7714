//! Service traits for the dimension entities (§4.6 referential guard).

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::dimension::{Manufacturer, Unit, UsageStatus};
use crate::dto::common::PaginationInfo;
use crate::dto::dimension::{
    DimensionListQuery, ManufacturerPatchRequest, ManufacturerPostRequest, UnitPostRequest,
    UsageStatusPostRequest,
};
use crate::Result;

#[async_trait]
pub trait UnitService: Send + Sync {
    async fn create_unit(&self, request: UnitPostRequest) -> Result<Unit>;
    async fn get_unit(&self, id: ObjectId) -> Result<Unit>;
    async fn list_units(&self, query: DimensionListQuery) -> Result<(Vec<Unit>, PaginationInfo)>;
    async fn delete_unit(&self, id: ObjectId) -> Result<()>;
}

#[async_trait]
pub trait UsageStatusService: Send + Sync {
    async fn create_usage_status(&self, request: UsageStatusPostRequest) -> Result<UsageStatus>;
    async fn get_usage_status(&self, id: ObjectId) -> Result<UsageStatus>;
    async fn list_usage_statuses(
        &self,
        query: DimensionListQuery,
    ) -> Result<(Vec<UsageStatus>, PaginationInfo)>;
    async fn delete_usage_status(&self, id: ObjectId) -> Result<()>;
}

#[async_trait]
pub trait ManufacturerService: Send + Sync {
    async fn create_manufacturer(&self, request: ManufacturerPostRequest) -> Result<Manufacturer>;
    async fn get_manufacturer(&self, id: ObjectId) -> Result<Manufacturer>;
    async fn list_manufacturers(
        &self,
        query: DimensionListQuery,
    ) -> Result<(Vec<Manufacturer>, PaginationInfo)>;
    async fn update_manufacturer(
        &self,
        id: ObjectId,
        patch: ManufacturerPatchRequest,
    ) -> Result<Manufacturer>;
    async fn delete_manufacturer(&self, id: ObjectId) -> Result<()>;
}
