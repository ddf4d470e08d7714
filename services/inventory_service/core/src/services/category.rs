//! Catalogue category service trait: Taxonomy Store (§4.1) + Property
//! Schema Engine (§4.2) + Property Propagation Coordinator (§4.3).

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::category::{Breadcrumbs, CatalogueCategory};
use crate::dto::category::{CategoryListQuery, CategoryPatchRequest, CategoryPostRequest};
use crate::dto::common::PaginationInfo;
use crate::dto::property::{PropertyPatchRequest, PropertyPostRequest};
use crate::Result;

#[async_trait]
pub trait CatalogueCategoryService: Send + Sync {
    async fn create_category(&self, request: CategoryPostRequest) -> Result<CatalogueCategory>;

    async fn get_category(&self, id: ObjectId) -> Result<CatalogueCategory>;

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs>;

    async fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> Result<(Vec<CatalogueCategory>, PaginationInfo)>;

    async fn update_category(
        &self,
        id: ObjectId,
        patch: CategoryPatchRequest,
    ) -> Result<CatalogueCategory>;

    async fn delete_category(&self, id: ObjectId) -> Result<()>;

    /// §4.3 add-property operation.
    async fn add_property(
        &self,
        category_id: ObjectId,
        request: PropertyPostRequest,
    ) -> Result<CatalogueCategory>;

    /// §4.3 update-property operation.
    async fn update_property(
        &self,
        category_id: ObjectId,
        property_id: ObjectId,
        patch: PropertyPatchRequest,
    ) -> Result<CatalogueCategory>;
}
