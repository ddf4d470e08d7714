//! System repository trait (§4.1, §4.5) — mirrors the catalogue category
//! tree operations, minus the property schema.

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::category::Breadcrumbs;
use crate::domains::system::System;
use crate::repositories::category::ParentFilter;
use crate::Result;

#[async_trait]
pub trait SystemRepository: Send + Sync {
    async fn create(&self, system: System) -> Result<System>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<System>>;

    async fn find_by_parent_and_code(
        &self,
        parent_id: Option<ObjectId>,
        code: &str,
    ) -> Result<Option<System>>;

    async fn update(&self, system: System) -> Result<System>;

    async fn delete(&self, id: ObjectId) -> Result<bool>;

    async fn list(
        &self,
        filter: ParentFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<System>, i64)>;

    async fn has_child_systems(&self, id: ObjectId) -> Result<bool>;

    async fn has_child_items(&self, id: ObjectId) -> Result<bool>;

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs>;

    async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool>;
}
