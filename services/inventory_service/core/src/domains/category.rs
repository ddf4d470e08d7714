//! Catalogue category domain entity.
//!
//! A node in the taxonomy tree. Leaves carry a `Property` schema and may be
//! referenced by catalogue items; non-leaves carry children and an empty
//! property list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::property::Property;

/// Maximum number of entries a breadcrumb trail returns before truncating.
pub const TRAIL_MAX_LENGTH: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogueCategory {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub is_leaf: bool,
    pub properties: Vec<Property>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl CatalogueCategory {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// One `(id, name)` entry in a breadcrumb trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BreadcrumbEntry {
    pub id: ObjectId,
    pub name: String,
}

/// Result of the breadcrumb walk (§4.5): an ordered root-to-entity trail,
/// capped at [`TRAIL_MAX_LENGTH`], plus whether truncation occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Breadcrumbs {
    pub trail: Vec<BreadcrumbEntry>,
    pub full_trail: bool,
}
