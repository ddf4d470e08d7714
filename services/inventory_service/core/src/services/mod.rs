//! Service trait definitions for the inventory service. Pure interfaces;
//! the infra crate provides implementations.

pub mod catalogue_item;
pub mod category;
pub mod dimension;
pub mod item;
pub mod system;

pub use catalogue_item::CatalogueItemService;
pub use category::CatalogueCategoryService;
pub use dimension::{ManufacturerService, UnitService, UsageStatusService};
pub use item::ItemService;
pub use system::SystemService;
