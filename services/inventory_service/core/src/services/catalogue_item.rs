//! Catalogue item service trait: Instance Validator (§4.4) for catalogue
//! items.

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::catalogue_item::CatalogueItem;
use crate::dto::catalogue_item::{
    CatalogueItemListQuery, CatalogueItemPatchRequest, CatalogueItemPostRequest,
};
use crate::dto::common::PaginationInfo;
use crate::Result;

#[async_trait]
pub trait CatalogueItemService: Send + Sync {
    async fn create_catalogue_item(
        &self,
        request: CatalogueItemPostRequest,
    ) -> Result<CatalogueItem>;

    async fn get_catalogue_item(&self, id: ObjectId) -> Result<CatalogueItem>;

    async fn list_catalogue_items(
        &self,
        query: CatalogueItemListQuery,
    ) -> Result<(Vec<CatalogueItem>, PaginationInfo)>;

    async fn update_catalogue_item(
        &self,
        id: ObjectId,
        patch: CatalogueItemPatchRequest,
    ) -> Result<CatalogueItem>;

    async fn delete_catalogue_item(&self, id: ObjectId) -> Result<()>;
}
