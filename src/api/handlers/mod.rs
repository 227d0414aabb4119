use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::catalog::DocCatalog;
use crate::models::*;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Versions
// ============================================================

pub async fn list_versions(State(catalog): State<DocCatalog>) -> Json<Vec<VersionSummary>> {
    Json(catalog.summaries())
}

pub async fn get_version(
    State(catalog): State<DocCatalog>,
    Path(id): Path<String>,
) -> Result<Json<VersionSnapshot>, (StatusCode, String)> {
    catalog
        .get_version(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Version not found".to_string()))
}

// ============================================================
// Guide pages
// ============================================================

pub async fn get_pages(
    State(catalog): State<DocCatalog>,
    Path(id): Path<String>,
) -> Result<Json<DocPage>, (StatusCode, String)> {
    catalog
        .get_version(&id)
        .map(|snapshot| Json(snapshot.pages.clone()))
        .ok_or((StatusCode::NOT_FOUND, "Version not found".to_string()))
}

pub async fn get_page(
    State(catalog): State<DocCatalog>,
    Path((id, path)): Path<(String, String)>,
) -> Result<Json<DocPage>, (StatusCode, String)> {
    catalog
        .get_version(&id)
        .ok_or((StatusCode::NOT_FOUND, "Version not found".to_string()))?;

    catalog
        .find_page(&id, &path)
        .cloned()
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("No page at path: {}", path),
        ))
}

// ============================================================
// API reference
// ============================================================

pub async fn get_api_index(
    State(catalog): State<DocCatalog>,
    Path(id): Path<String>,
) -> Result<Json<ApiIndex>, (StatusCode, String)> {
    catalog
        .get_version(&id)
        .map(|snapshot| Json(snapshot.api.clone()))
        .ok_or((StatusCode::NOT_FOUND, "Version not found".to_string()))
}

pub async fn get_package(
    State(catalog): State<DocCatalog>,
    Path((id, package)): Path<(String, String)>,
) -> Result<Json<PackageApi>, (StatusCode, String)> {
    catalog
        .get_version(&id)
        .ok_or((StatusCode::NOT_FOUND, "Version not found".to_string()))?;

    catalog
        .get_package(&id, &package)
        .cloned()
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("No package named: {}", package),
        ))
}
