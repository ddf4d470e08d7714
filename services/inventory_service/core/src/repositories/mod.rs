//! Repository trait definitions. No implementation details — the infra
//! crate provides PostgreSQL-backed implementations.

pub mod catalogue_item;
pub mod category;
pub mod dimension;
pub mod item;
pub mod system;

/// Transaction abstraction so core stays free of a direct sqlx dependency
/// for the few call sites (outside the property-propagation coordinator)
/// that need to compose a read-then-write across a service boundary.
pub mod transaction {
    use async_trait::async_trait;
    use shared_error::AppError;

    #[async_trait]
    pub trait Transaction: Send + Sync {
        async fn commit(self) -> Result<(), AppError>;
    }
}

pub use catalogue_item::CatalogueItemRepository;
pub use category::{CatalogueCategoryRepository, ParentFilter};
pub use dimension::{ManufacturerRepository, UnitRepository, UsageStatusRepository};
pub use item::ItemRepository;
pub use system::SystemRepository;
