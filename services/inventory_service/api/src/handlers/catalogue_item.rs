//! Catalogue item HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use inventory_service_core::dto::catalogue_item::{
    CatalogueItemListQuery, CatalogueItemListResponse, CatalogueItemPatchRequest,
    CatalogueItemPostRequest, CatalogueItemResponse,
};
use inventory_service_core::AppError;

use crate::handlers::parse_id;
use crate::state::AppState;

async fn create_catalogue_item(
    State(state): State<AppState>,
    Json(request): Json<CatalogueItemPostRequest>,
) -> Result<(StatusCode, Json<CatalogueItemResponse>), AppError> {
    let item = state.catalogue_items.create_catalogue_item(request).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

async fn get_catalogue_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogueItemResponse>, AppError> {
    let id = parse_id(&id)?;
    let item = state.catalogue_items.get_catalogue_item(id).await?;
    Ok(Json(item.into()))
}

async fn list_catalogue_items(
    State(state): State<AppState>,
    Query(query): Query<CatalogueItemListQuery>,
) -> Result<Json<CatalogueItemListResponse>, AppError> {
    let (items, pagination) = state.catalogue_items.list_catalogue_items(query).await?;
    Ok(Json(CatalogueItemListResponse {
        data: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

async fn update_catalogue_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CatalogueItemPatchRequest>,
) -> Result<Json<CatalogueItemResponse>, AppError> {
    let id = parse_id(&id)?;
    let item = state.catalogue_items.update_catalogue_item(id, patch).await?;
    Ok(Json(item.into()))
}

async fn delete_catalogue_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.catalogue_items.delete_catalogue_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_catalogue_item).get(list_catalogue_items))
        .route(
            "/{id}",
            get(get_catalogue_item)
                .patch(update_catalogue_item)
                .delete(delete_catalogue_item),
        )
}
