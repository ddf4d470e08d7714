//! Item repository trait (§4.4).

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::item::Item;
use crate::Result;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: Item) -> Result<Item>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>>;

    async fn update(&self, item: Item) -> Result<Item>;

    async fn delete(&self, id: ObjectId) -> Result<bool>;

    async fn list(
        &self,
        catalogue_item_id: Option<ObjectId>,
        system_id: Option<ObjectId>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Item>, i64)>;
}
