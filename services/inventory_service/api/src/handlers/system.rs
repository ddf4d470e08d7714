//! System tree HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use inventory_service_core::dto::category::BreadcrumbsResponse;
use inventory_service_core::dto::system::{
    SystemListQuery, SystemListResponse, SystemPatchRequest, SystemPostRequest, SystemResponse,
};
use inventory_service_core::AppError;

use crate::handlers::parse_id;
use crate::state::AppState;

async fn create_system(
    State(state): State<AppState>,
    Json(request): Json<SystemPostRequest>,
) -> Result<(StatusCode, Json<SystemResponse>), AppError> {
    let system = state.systems.create_system(request).await?;
    Ok((StatusCode::CREATED, Json(system.into())))
}

async fn get_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SystemResponse>, AppError> {
    let id = parse_id(&id)?;
    let system = state.systems.get_system(id).await?;
    Ok(Json(system.into()))
}

async fn get_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreadcrumbsResponse>, AppError> {
    let id = parse_id(&id)?;
    let trail = state.systems.get_breadcrumbs(id).await?;
    Ok(Json(trail.into()))
}

async fn list_systems(
    State(state): State<AppState>,
    Query(query): Query<SystemListQuery>,
) -> Result<Json<SystemListResponse>, AppError> {
    let (systems, pagination) = state.systems.list_systems(query).await?;
    Ok(Json(SystemListResponse {
        data: systems.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

async fn update_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SystemPatchRequest>,
) -> Result<Json<SystemResponse>, AppError> {
    let id = parse_id(&id)?;
    let system = state.systems.update_system(id, patch).await?;
    Ok(Json(system.into()))
}

async fn delete_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.systems.delete_system(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_system).get(list_systems))
        .route(
            "/{id}",
            get(get_system).patch(update_system).delete(delete_system),
        )
        .route("/{id}/breadcrumbs", get(get_breadcrumbs))
}
