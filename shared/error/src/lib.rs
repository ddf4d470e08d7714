//! Crate-wide error taxonomy and its HTTP transport mapping.
//!
//! `AppError` is the single error type threaded through repositories,
//! services, and handlers. Each variant corresponds to one of the error
//! kinds in the specification's error model; `IntoResponse` performs the
//! kind-to-status mapping so handlers never construct a `StatusCode`
//! themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Referenced entity does not exist.
    Missing(String),
    /// `(parent_id, code)` (or global code, for dimension entities) collides with an existing record.
    Duplicate(String),
    /// Entity has child categories/items/systems and the requested mutation is blocked.
    ChildrenExist(String),
    /// Dimension entity is still referenced and cannot be deleted.
    PartOf(String),
    /// Parent catalogue category is a leaf; cannot accept a child category.
    LeafParent(String),
    /// Catalogue item references a non-leaf category.
    NonLeafCategoryForItem(String),
    /// Forbidden mutation: move-cycle, editing a locked field, renaming conflicts, etc.
    InvalidAction(String),
    /// Two properties in the same category share a name.
    DuplicatePropertyName(String),
    /// A property value does not match its definition's declared type.
    InvalidPropertyType(String),
    /// A mandatory property has no value.
    MissingMandatoryProperty(String),
    /// Id string is not a well-formed 24-hex-char object id.
    InvalidObjectId(String),
    /// An invariant that should never fire did (a dangling parent chain, a
    /// property missing its backing unit after validation passed).
    DatabaseIntegrity(String),
    /// Request-DTO validation failure (`validator::Validate`).
    Validation(String),
    /// Database driver or other unexpected failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Missing(msg) => write!(f, "{}", msg),
            AppError::Duplicate(msg) => write!(f, "{}", msg),
            AppError::ChildrenExist(msg) => write!(f, "{}", msg),
            AppError::PartOf(msg) => write!(f, "{}", msg),
            AppError::LeafParent(msg) => write!(f, "{}", msg),
            AppError::NonLeafCategoryForItem(msg) => write!(f, "{}", msg),
            AppError::InvalidAction(msg) => write!(f, "{}", msg),
            AppError::DuplicatePropertyName(msg) => write!(f, "{}", msg),
            AppError::InvalidPropertyType(msg) => write!(f, "{}", msg),
            AppError::MissingMandatoryProperty(msg) => write!(f, "{}", msg),
            AppError::InvalidObjectId(msg) => write!(f, "{}", msg),
            AppError::DatabaseIntegrity(msg) => write!(f, "{}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Missing(ref msg) | AppError::InvalidObjectId(ref msg) => {
                (StatusCode::NOT_FOUND, msg.clone())
            }
            AppError::Duplicate(ref msg)
            | AppError::ChildrenExist(ref msg)
            | AppError::PartOf(ref msg)
            | AppError::LeafParent(ref msg)
            | AppError::NonLeafCategoryForItem(ref msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::InvalidAction(ref msg)
            | AppError::DuplicatePropertyName(ref msg)
            | AppError::InvalidPropertyType(ref msg)
            | AppError::MissingMandatoryProperty(ref msg)
            | AppError::Validation(ref msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::DatabaseIntegrity(ref msg) => {
                tracing::error!("database integrity violation: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::Missing("Record not found".to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Internal(format!("configuration error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn maps_missing_to_404() {
        assert_eq!(status_of(AppError::Missing("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::InvalidObjectId("x".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn maps_conflicts_to_409() {
        assert_eq!(status_of(AppError::Duplicate("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::ChildrenExist("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::PartOf("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::LeafParent("x".into())), StatusCode::CONFLICT);
    }

    #[test]
    fn maps_invalid_action_family_to_422() {
        assert_eq!(
            status_of(AppError::InvalidAction("x".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::MissingMandatoryProperty("x".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn maps_database_integrity_to_500() {
        assert_eq!(
            status_of(AppError::DatabaseIntegrity("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_becomes_missing() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Missing(_)));
    }
}
