//! System domain entity — a node in the independent physical/logical
//! location tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct System {
    pub id: ObjectId,
    pub name: String,
    pub code: String,
    pub parent_id: Option<ObjectId>,
    pub importance: Importance,
    pub description: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl System {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
