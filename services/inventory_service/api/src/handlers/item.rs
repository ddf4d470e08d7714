//! Physical item HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use inventory_service_core::dto::item::{
    ItemListQuery, ItemListResponse, ItemPatchRequest, ItemPostRequest, ItemResponse,
};
use inventory_service_core::AppError;

use crate::handlers::parse_id;
use crate::state::AppState;

async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<ItemPostRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let item = state.items.create_item(request).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let id = parse_id(&id)?;
    let item = state.items.get_item(id).await?;
    Ok(Json(item.into()))
}

async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemListQuery>,
) -> Result<Json<ItemListResponse>, AppError> {
    let (items, pagination) = state.items.list_items(query).await?;
    Ok(Json(ItemListResponse {
        data: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatchRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let id = parse_id(&id)?;
    let item = state.items.update_item(id, patch).await?;
    Ok(Json(item.into()))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.items.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route(
            "/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
}
