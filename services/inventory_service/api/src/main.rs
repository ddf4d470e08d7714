//! Inventory Service Main Application
//!
//! This is the main entry point for the inventory service.
//! It sets up the web server and starts the application.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_service_api::create_router;
use shared_config::Config;
use shared_db::init_pool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Export OpenAPI spec if feature is enabled, then exit without starting the server
    #[cfg(feature = "export-spec")]
    {
        inventory_service_api::openapi::export_spec()?;
        println!("OpenAPI spec exported to shared/openapi/inventory.yaml");
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database connection pool
    let pool = init_pool(&config.database_url, config.max_connections).await?;

    // Create the application router
    let app = create_router(pool).await;

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Inventory service listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
