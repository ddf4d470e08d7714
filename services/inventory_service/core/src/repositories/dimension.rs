//! Repository traits for the dimension entities (§4.6).

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::dimension::{Manufacturer, Unit, UsageStatus};
use crate::Result;

#[async_trait]
pub trait UnitRepository: Send + Sync {
    async fn create(&self, unit: Unit) -> Result<Unit>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Unit>>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Unit>>;
    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<Unit>, i64)>;
    async fn delete(&self, id: ObjectId) -> Result<bool>;
    /// §4.6 referential guard: any category property with `unit_id = id`.
    async fn is_referenced_by_any_category(&self, id: ObjectId) -> Result<bool>;
}

#[async_trait]
pub trait UsageStatusRepository: Send + Sync {
    async fn create(&self, status: UsageStatus) -> Result<UsageStatus>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UsageStatus>>;
    async fn find_by_code(&self, code: &str) -> Result<Option<UsageStatus>>;
    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<UsageStatus>, i64)>;
    async fn delete(&self, id: ObjectId) -> Result<bool>;
    /// §4.6 referential guard: any item with `usage_status_id = id`.
    async fn is_referenced_by_any_item(&self, id: ObjectId) -> Result<bool>;
}

#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    async fn create(&self, manufacturer: Manufacturer) -> Result<Manufacturer>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Manufacturer>>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Manufacturer>>;
    async fn update(&self, manufacturer: Manufacturer) -> Result<Manufacturer>;
    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<Manufacturer>, i64)>;
    async fn delete(&self, id: ObjectId) -> Result<bool>;
    /// §4.6 referential guard: any catalogue item with `manufacturer_id = id`.
    async fn is_referenced_by_any_catalogue_item(&self, id: ObjectId) -> Result<bool>;
}
