//! Inventory Service Infrastructure
//!
//! This crate contains the infrastructure implementations for the inventory service.
//! It provides concrete implementations of repositories and services.
//!
//! ## Architecture
//!
//! - `repositories/`: PostgreSQL repository implementations
//! - `services/`: Service implementations with business logic

pub mod repositories;
mod rows;
pub mod services;

pub use repositories::{
    CatalogueCategoryRepositoryImpl, CatalogueItemRepositoryImpl, ItemRepositoryImpl,
    ManufacturerRepositoryImpl, SystemRepositoryImpl, UnitRepositoryImpl, UsageStatusRepositoryImpl,
};
pub use services::{
    CatalogueCategoryServiceImpl, CatalogueItemServiceImpl, ItemServiceImpl, ManufacturerServiceImpl,
    SystemServiceImpl, UnitServiceImpl, UsageStatusServiceImpl,
};
