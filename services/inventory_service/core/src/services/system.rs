//! System service trait: Taxonomy Store (§4.1) mirrored for the system
//! tree, minus the property schema.

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::category::Breadcrumbs;
use crate::domains::system::System;
use crate::dto::common::PaginationInfo;
use crate::dto::system::{SystemListQuery, SystemPatchRequest, SystemPostRequest};
use crate::Result;

#[async_trait]
pub trait SystemService: Send + Sync {
    async fn create_system(&self, request: SystemPostRequest) -> Result<System>;

    async fn get_system(&self, id: ObjectId) -> Result<System>;

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs>;

    async fn list_systems(&self, query: SystemListQuery) -> Result<(Vec<System>, PaginationInfo)>;

    async fn update_system(&self, id: ObjectId, patch: SystemPatchRequest) -> Result<System>;

    async fn delete_system(&self, id: ObjectId) -> Result<()>;
}
