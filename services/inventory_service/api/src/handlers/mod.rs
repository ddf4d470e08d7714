//! HTTP handlers for the inventory service.

pub mod catalogue_item;
pub mod category;
pub mod dimension;
pub mod health;
pub mod item;
pub mod system;

use inventory_service_core::AppError;
use shared_types::ObjectId;

/// Parses a path parameter as an [`ObjectId`], mapping malformed ids to the
/// same 404 a missing-but-well-formed id would produce.
pub(crate) fn parse_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::try_parse(raw)
        .ok_or_else(|| AppError::InvalidObjectId(format!("'{raw}' is not a valid object id")))
}
