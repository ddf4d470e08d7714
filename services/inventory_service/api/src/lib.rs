//! Inventory Service API
//!
//! This crate contains the HTTP API handlers and routing for the inventory service.
//! It provides REST endpoints for catalogue categories, catalogue items, physical
//! items, systems, and the dimension entities (units, usage statuses, manufacturers).
//!
//! ## Architecture
//!
//! - `handlers/`: Axum HTTP handlers
//! - `routes/`: Route definitions and router assembly
//! - `middleware/`: Ambient middleware
//! - `state/`: Shared application state

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

// Re-export main components for convenience
pub use routes::create_router;

use axum::Router;
use shared_config::Config;
use shared_db::init_pool;

/// Create the complete application with database initialization.
/// Used for integration tests.
pub async fn create_app(config: Config) -> Router {
    let pool = init_pool(&config.database_url, config.max_connections)
        .await
        .expect("Failed to initialize database pool");
    create_router(pool).await
}
