//! Products API - REST server

use axum::{routing::get, Json, Router};
use axum_helpers::shutdown_signal;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{handlers, ProductService, SqliteProductRepository};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod openapi;

use config::Config;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Opening database at {}", config.database.url);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;

    let repository = SqliteProductRepository::new(pool.clone());
    repository.init_schema().await?;

    let service = ProductService::new(repository);

    let app = Router::new()
        .nest("/products", handlers::router(service))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Products API listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down: closing database pool");
    pool.close().await;
    info!("Products API shutdown complete");
    Ok(())
}
