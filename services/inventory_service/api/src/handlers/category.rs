//! Catalogue category HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use inventory_service_core::dto::category::{
    BreadcrumbsResponse, CategoryListQuery, CategoryListResponse, CategoryPatchRequest,
    CategoryPostRequest, CategoryResponse,
};
use inventory_service_core::dto::property::{PropertyPatchRequest, PropertyPostRequest};
use inventory_service_core::AppError;

use crate::handlers::parse_id;
use crate::state::AppState;

async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryPostRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let category = state.catalogue_categories.create_category(request).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let id = parse_id(&id)?;
    let category = state.catalogue_categories.get_category(id).await?;
    Ok(Json(category.into()))
}

async fn get_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreadcrumbsResponse>, AppError> {
    let id = parse_id(&id)?;
    let trail = state.catalogue_categories.get_breadcrumbs(id).await?;
    Ok(Json(trail.into()))
}

async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let (categories, pagination) = state.catalogue_categories.list_categories(query).await?;
    Ok(Json(CategoryListResponse {
        data: categories.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatchRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let id = parse_id(&id)?;
    let category = state.catalogue_categories.update_category(id, patch).await?;
    Ok(Json(category.into()))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.catalogue_categories.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PropertyPostRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let id = parse_id(&id)?;
    let category = state.catalogue_categories.add_property(id, request).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

async fn update_property(
    State(state): State<AppState>,
    Path((category_id, property_id)): Path<(String, String)>,
    Json(patch): Json<PropertyPatchRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category_id = parse_id(&category_id)?;
    let property_id = parse_id(&property_id)?;
    let category = state
        .catalogue_categories
        .update_property(category_id, property_id, patch)
        .await?;
    Ok(Json(category.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/{id}",
            get(get_category).patch(update_category).delete(delete_category),
        )
        .route("/{id}/breadcrumbs", get(get_breadcrumbs))
        .route("/{id}/properties", post(add_property))
        .route("/{id}/properties/{property_id}", patch(update_property))
}
