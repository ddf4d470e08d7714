//! Catalogue category repository trait (§4.1, §4.3, §4.5).
//!
//! No implementation details here — the infra crate provides the
//! PostgreSQL-backed implementation.

use async_trait::async_trait;
use shared_types::ObjectId;

use crate::domains::category::{Breadcrumbs, CatalogueCategory};
use crate::domains::property::{Property, PropertyScalar};
use crate::Result;

/// Filter applied to `list`: `Any` means no filter, `Root` means
/// `parent_id IS NULL`, `Under(id)` means a specific parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentFilter {
    Any,
    Root,
    Under(ObjectId),
}

#[async_trait]
pub trait CatalogueCategoryRepository: Send + Sync {
    async fn create(&self, category: CatalogueCategory) -> Result<CatalogueCategory>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueCategory>>;

    /// Looks up a sibling sharing the same `(parent_id, code)` pair, used
    /// for the duplicate-in-parent check on create and on move/rename.
    async fn find_by_parent_and_code(
        &self,
        parent_id: Option<ObjectId>,
        code: &str,
    ) -> Result<Option<CatalogueCategory>>;

    async fn update(&self, category: CatalogueCategory) -> Result<CatalogueCategory>;

    /// Deletes the category. The caller (service layer) is responsible for
    /// the children-exist guard beforehand.
    async fn delete(&self, id: ObjectId) -> Result<bool>;

    async fn list(
        &self,
        filter: ParentFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<CatalogueCategory>, i64)>;

    async fn has_child_categories(&self, id: ObjectId) -> Result<bool>;

    async fn has_child_catalogue_items(&self, id: ObjectId) -> Result<bool>;

    /// §4.5 breadcrumb walk, capped at `TRAIL_MAX_LENGTH`.
    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs>;

    /// §4.5 move-cycle check: true if moving `moving_id` under
    /// `destination_id` would create a cycle (i.e. `destination_id` is
    /// `moving_id` itself or one of its descendants).
    async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool>;

    /// §4.3 add-property operation: within a single transaction, appends
    /// `property` to the category and pushes a new PropertyValue (with
    /// `default_value`) into every catalogue item under the category and
    /// every item under those catalogue items.
    async fn add_property(
        &self,
        category_id: ObjectId,
        property: Property,
        default_value: Option<PropertyScalar>,
    ) -> Result<CatalogueCategory>;

    /// §4.3 update-property operation: within a single transaction,
    /// replaces the matching property sub-document in the category and,
    /// only if the name changed, renames the cached `name` on every
    /// matching PropertyValue in catalogue items and items.
    async fn update_property(
        &self,
        category_id: ObjectId,
        property: Property,
        rename_occurred: bool,
    ) -> Result<CatalogueCategory>;
}
