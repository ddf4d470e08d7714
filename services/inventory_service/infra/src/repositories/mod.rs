//! Repository implementations
//!
//! This module contains PostgreSQL implementations of the repository traits.

pub mod catalogue_item;
pub mod category;
pub mod dimension;
pub mod item;
pub mod system;

pub use catalogue_item::CatalogueItemRepositoryImpl;
pub use category::CatalogueCategoryRepositoryImpl;
pub use dimension::{ManufacturerRepositoryImpl, UnitRepositoryImpl, UsageStatusRepositoryImpl};
pub use item::ItemRepositoryImpl;
pub use system::SystemRepositoryImpl;
