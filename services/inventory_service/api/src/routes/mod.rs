//! Route definitions and router creation
//!
//! This module defines the API routes and creates the main router.

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use inventory_service_infra::repositories::{
    CatalogueCategoryRepositoryImpl, CatalogueItemRepositoryImpl, ItemRepositoryImpl,
    ManufacturerRepositoryImpl, SystemRepositoryImpl, UnitRepositoryImpl, UsageStatusRepositoryImpl,
};
use inventory_service_infra::services::{
    CatalogueCategoryServiceImpl, CatalogueItemServiceImpl, ItemServiceImpl,
    ManufacturerServiceImpl, SystemServiceImpl, UnitServiceImpl, UsageStatusServiceImpl,
};

use crate::handlers::{catalogue_item, category, dimension, health, item, system};
use crate::state::AppState;

/// Create the main application router
pub async fn create_router(pool: PgPool) -> Router {
    let category_repo = CatalogueCategoryRepositoryImpl::new(pool.clone());
    let unit_repo_for_categories = UnitRepositoryImpl::new(pool.clone());
    let catalogue_categories =
        CatalogueCategoryServiceImpl::new(category_repo, unit_repo_for_categories);

    let unit_repo = UnitRepositoryImpl::new(pool.clone());
    let units = UnitServiceImpl::new(unit_repo);

    let usage_status_repo = UsageStatusRepositoryImpl::new(pool.clone());
    let usage_statuses = UsageStatusServiceImpl::new(usage_status_repo);

    let manufacturer_repo = ManufacturerRepositoryImpl::new(pool.clone());
    let manufacturers = ManufacturerServiceImpl::new(manufacturer_repo);

    let catalogue_item_repo = CatalogueItemRepositoryImpl::new(pool.clone());
    let catalogue_items = CatalogueItemServiceImpl::new(
        catalogue_item_repo,
        CatalogueCategoryRepositoryImpl::new(pool.clone()),
        ManufacturerRepositoryImpl::new(pool.clone()),
    );

    let item_repo = ItemRepositoryImpl::new(pool.clone());
    let items = ItemServiceImpl::new(
        item_repo,
        CatalogueItemRepositoryImpl::new(pool.clone()),
        CatalogueCategoryRepositoryImpl::new(pool.clone()),
        SystemRepositoryImpl::new(pool.clone()),
        UsageStatusRepositoryImpl::new(pool.clone()),
    );

    let system_repo = SystemRepositoryImpl::new(pool.clone());
    let systems = SystemServiceImpl::new(system_repo);

    let state = AppState {
        pool: pool.clone(),
        catalogue_categories: std::sync::Arc::new(catalogue_categories),
        catalogue_items: std::sync::Arc::new(catalogue_items),
        items: std::sync::Arc::new(items),
        systems: std::sync::Arc::new(systems),
        units: std::sync::Arc::new(units),
        usage_statuses: std::sync::Arc::new(usage_statuses),
        manufacturers: std::sync::Arc::new(manufacturers),
    };

    Router::new()
        .nest("/v1", health::router())
        .nest("/v1/catalogue-categories", category::router())
        .nest("/v1/catalogue-items", catalogue_item::router())
        .nest("/v1/items", item::router())
        .nest("/v1/systems", system::router())
        .nest("/v1/units", dimension::units_router())
        .nest("/v1/usage-statuses", dimension::usage_statuses_router())
        .nest("/v1/manufacturers", dimension::manufacturers_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
