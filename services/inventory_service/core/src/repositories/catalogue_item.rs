//! Catalogue item repository trait (§4.4).

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::catalogue_item::CatalogueItem;
use crate::Result;

#[async_trait]
pub trait CatalogueItemRepository: Send + Sync {
    async fn create(&self, item: CatalogueItem) -> Result<CatalogueItem>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueItem>>;

    async fn update(&self, item: CatalogueItem) -> Result<CatalogueItem>;

    async fn delete(&self, id: ObjectId) -> Result<bool>;

    async fn list(
        &self,
        catalogue_category_id: Option<ObjectId>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<CatalogueItem>, i64)>;

    /// All ids of catalogue items directly under `catalogue_category_id`,
    /// used by the Property Propagation Coordinator to fan writes out to
    /// items without materializing full rows.
    async fn list_ids_by_category(&self, catalogue_category_id: ObjectId) -> Result<Vec<ObjectId>>;

    /// Used by the §4.4 child-element lockout and by manufacturer/category
    /// move guards.
    async fn has_items(&self, catalogue_item_id: ObjectId) -> Result<bool>;
}
