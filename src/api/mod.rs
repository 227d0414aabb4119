mod handlers;
mod middleware;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::DocCatalog;

pub use middleware::ApiConfig;

pub fn create_router(catalog: DocCatalog) -> Router {
    create_router_with_config(catalog, ApiConfig::from_env())
}

pub fn create_router_with_config(catalog: DocCatalog, config: ApiConfig) -> Router {
    let api = Router::new()
        // Versions
        .route("/versions", get(handlers::list_versions))
        .route("/versions/{id}", get(handlers::get_version))
        // Guide pages
        .route("/versions/{id}/pages", get(handlers::get_pages))
        .route("/versions/{id}/pages/{*path}", get(handlers::get_page))
        // API reference (wildcard: package names contain '/')
        .route("/versions/{id}/api", get(handlers::get_api_index))
        .route("/versions/{id}/api/{*package}", get(handlers::get_package))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(catalog)
}
