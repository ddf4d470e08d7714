//! Application state for inventory service
//!
//! This module contains the shared application state used across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use inventory_service_core::services::catalogue_item::CatalogueItemService;
use inventory_service_core::services::category::CatalogueCategoryService;
use inventory_service_core::services::dimension::{
    ManufacturerService, UnitService, UsageStatusService,
};
use inventory_service_core::services::item::ItemService;
use inventory_service_core::services::system::SystemService;

/// Application state for inventory service
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub catalogue_categories: Arc<dyn CatalogueCategoryService>,
    pub catalogue_items: Arc<dyn CatalogueItemService>,
    pub items: Arc<dyn ItemService>,
    pub systems: Arc<dyn SystemService>,
    pub units: Arc<dyn UnitService>,
    pub usage_statuses: Arc<dyn UsageStatusService>,
    pub manufacturers: Arc<dyn ManufacturerService>,
}
