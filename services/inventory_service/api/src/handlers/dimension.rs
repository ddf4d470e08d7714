//! HTTP handlers for the dimension entities: units, usage statuses,
//! manufacturers (§4.6).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use inventory_service_core::dto::dimension::{
    DimensionListQuery, ManufacturerListResponse, ManufacturerPatchRequest,
    ManufacturerPostRequest, ManufacturerResponse, UnitPostRequest, UnitResponse,
    UsageStatusPostRequest, UsageStatusResponse,
};
use inventory_service_core::AppError;

use crate::handlers::parse_id;
use crate::state::AppState;

async fn create_unit(
    State(state): State<AppState>,
    Json(request): Json<UnitPostRequest>,
) -> Result<(StatusCode, Json<UnitResponse>), AppError> {
    let unit = state.units.create_unit(request).await?;
    Ok((StatusCode::CREATED, Json(unit.into())))
}

async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UnitResponse>, AppError> {
    let id = parse_id(&id)?;
    let unit = state.units.get_unit(id).await?;
    Ok(Json(unit.into()))
}

async fn list_units(
    State(state): State<AppState>,
    Query(query): Query<DimensionListQuery>,
) -> Result<Json<Vec<UnitResponse>>, AppError> {
    let (units, _pagination) = state.units.list_units(query).await?;
    Ok(Json(units.into_iter().map(Into::into).collect()))
}

async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.units.delete_unit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_usage_status(
    State(state): State<AppState>,
    Json(request): Json<UsageStatusPostRequest>,
) -> Result<(StatusCode, Json<UsageStatusResponse>), AppError> {
    let status = state.usage_statuses.create_usage_status(request).await?;
    Ok((StatusCode::CREATED, Json(status.into())))
}

async fn get_usage_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UsageStatusResponse>, AppError> {
    let id = parse_id(&id)?;
    let status = state.usage_statuses.get_usage_status(id).await?;
    Ok(Json(status.into()))
}

async fn list_usage_statuses(
    State(state): State<AppState>,
    Query(query): Query<DimensionListQuery>,
) -> Result<Json<Vec<UsageStatusResponse>>, AppError> {
    let (statuses, _pagination) = state.usage_statuses.list_usage_statuses(query).await?;
    Ok(Json(statuses.into_iter().map(Into::into).collect()))
}

async fn delete_usage_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.usage_statuses.delete_usage_status(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Json(request): Json<ManufacturerPostRequest>,
) -> Result<(StatusCode, Json<ManufacturerResponse>), AppError> {
    let manufacturer = state.manufacturers.create_manufacturer(request).await?;
    Ok((StatusCode::CREATED, Json(manufacturer.into())))
}

async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ManufacturerResponse>, AppError> {
    let id = parse_id(&id)?;
    let manufacturer = state.manufacturers.get_manufacturer(id).await?;
    Ok(Json(manufacturer.into()))
}

async fn list_manufacturers(
    State(state): State<AppState>,
    Query(query): Query<DimensionListQuery>,
) -> Result<Json<ManufacturerListResponse>, AppError> {
    let (manufacturers, pagination) = state.manufacturers.list_manufacturers(query).await?;
    Ok(Json(ManufacturerListResponse {
        data: manufacturers.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ManufacturerPatchRequest>,
) -> Result<Json<ManufacturerResponse>, AppError> {
    let id = parse_id(&id)?;
    let manufacturer = state.manufacturers.update_manufacturer(id, patch).await?;
    Ok(Json(manufacturer.into()))
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.manufacturers.delete_manufacturer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn units_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_unit).get(list_units))
        .route("/{id}", get(get_unit).delete(delete_unit))
}

pub fn usage_statuses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_usage_status).get(list_usage_statuses))
        .route("/{id}", get(get_usage_status).delete(delete_usage_status))
}

pub fn manufacturers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manufacturer).get(list_manufacturers))
        .route(
            "/{id}",
            get(get_manufacturer)
                .patch(update_manufacturer)
                .delete(delete_manufacturer),
        )
}
