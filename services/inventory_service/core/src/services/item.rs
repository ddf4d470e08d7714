//! Item service trait: Instance Validator (§4.4) for physical items, plus
//! one-layer inheritance resolution from the parent catalogue item.

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::item::Item;
use crate::dto::common::PaginationInfo;
use crate::dto::item::{ItemListQuery, ItemPatchRequest, ItemPostRequest};
use crate::Result;

#[async_trait]
pub trait ItemService: Send + Sync {
    async fn create_item(&self, request: ItemPostRequest) -> Result<Item>;

    /// Returns the item with its properties resolved against the parent
    /// catalogue item (§4.4 inheritance).
    async fn get_item(&self, id: ObjectId) -> Result<Item>;

    async fn list_items(&self, query: ItemListQuery) -> Result<(Vec<Item>, PaginationInfo)>;

    async fn update_item(&self, id: ObjectId, patch: ItemPatchRequest) -> Result<Item>;

    async fn delete_item(&self, id: ObjectId) -> Result<()>;
}
