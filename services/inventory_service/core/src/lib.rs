//! Inventory service core.
//!
//! Business logic, domain models, and trait definitions for the inventory
//! service. Zero infrastructure dependencies.
//!
//! - `domains/`: domain entities
//! - `dto/`: request/response payloads
//! - `repositories/`: repository trait definitions (no implementations)
//! - `services/`: service trait definitions (no implementations)

pub mod code;
pub mod domains;
pub mod dto;
pub mod repositories;
pub mod services;

pub use code::code;

pub use domains::category::{Breadcrumbs, CatalogueCategory, TRAIL_MAX_LENGTH};
pub use domains::catalogue_item::CatalogueItem;
pub use domains::dimension::{Manufacturer, Unit, UsageStatus};
pub use domains::item::Item;
pub use domains::property::{AllowedValues, Property, PropertyScalar, PropertyType, PropertyValue};
pub use domains::system::{Importance, System};

pub use repositories::{
    CatalogueCategoryRepository, CatalogueItemRepository, ItemRepository, ManufacturerRepository,
    ParentFilter, SystemRepository, UnitRepository, UsageStatusRepository,
};
pub use services::{
    CatalogueCategoryService, CatalogueItemService, ItemService, ManufacturerService,
    SystemService, UnitService, UsageStatusService,
};

pub use shared_error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
