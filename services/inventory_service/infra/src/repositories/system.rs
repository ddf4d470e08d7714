//! PostgreSQL-backed `SystemRepository` (§4.1, §4.5).

use async_trait::async_trait;
use inventory_service_core::domains::category::{BreadcrumbEntry, Breadcrumbs, TRAIL_MAX_LENGTH};
use inventory_service_core::domains::system::System;
use inventory_service_core::repositories::category::ParentFilter;
use inventory_service_core::repositories::system::SystemRepository;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;
use sqlx::PgPool;

use crate::rows::{importance_as_str, SystemRow};

const COLUMNS: &str = "id, name, code, parent_id, importance, description, location, owner, \
    created_time, modified_time";

pub struct SystemRepositoryImpl {
    pool: PgPool,
}

impl SystemRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SystemRepository for SystemRepositoryImpl {
    async fn create(&self, system: System) -> Result<System> {
        let row: SystemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO systems (id, name, code, parent_id, importance, description, location,
                                  owner, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(system.id)
        .bind(&system.name)
        .bind(&system.code)
        .bind(system.parent_id)
        .bind(importance_as_str(system.importance))
        .bind(&system.description)
        .bind(&system.location)
        .bind(&system.owner)
        .bind(system.created_time)
        .bind(system.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<System>> {
        let row: Option<SystemRow> = sqlx::query_as(&format!("SELECT {COLUMNS} FROM systems WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_parent_and_code(
        &self,
        parent_id: Option<ObjectId>,
        code: &str,
    ) -> Result<Option<System>> {
        let row: Option<SystemRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM systems WHERE code = $2 AND parent_id IS NOT DISTINCT FROM $1"
        ))
        .bind(parent_id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, system: System) -> Result<System> {
        let row: SystemRow = sqlx::query_as(&format!(
            r#"
            UPDATE systems
            SET name = $2, code = $3, parent_id = $4, importance = $5, description = $6,
                location = $7, owner = $8, modified_time = $9
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(system.id)
        .bind(&system.name)
        .bind(&system.code)
        .bind(system.parent_id)
        .bind(importance_as_str(system.importance))
        .bind(&system.description)
        .bind(&system.location)
        .bind(&system.owner)
        .bind(system.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM systems WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        filter: ParentFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<System>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;

        let (rows, total): (Vec<SystemRow>, i64) = match filter {
            ParentFilter::Any => {
                let rows = sqlx::query_as(&format!(
                    "SELECT {COLUMNS} FROM systems ORDER BY name ASC LIMIT $1 OFFSET $2"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM systems")
                    .fetch_one(&self.pool)
                    .await?;
                (rows, total.0)
            }
            ParentFilter::Root => {
                let rows = sqlx::query_as(&format!(
                    "SELECT {COLUMNS} FROM systems WHERE parent_id IS NULL \
                     ORDER BY name ASC LIMIT $1 OFFSET $2"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM systems WHERE parent_id IS NULL")
                        .fetch_one(&self.pool)
                        .await?;
                (rows, total.0)
            }
            ParentFilter::Under(parent_id) => {
                let rows = sqlx::query_as(&format!(
                    "SELECT {COLUMNS} FROM systems WHERE parent_id = $1 \
                     ORDER BY name ASC LIMIT $2 OFFSET $3"
                ))
                .bind(parent_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM systems WHERE parent_id = $1")
                        .bind(parent_id)
                        .fetch_one(&self.pool)
                        .await?;
                (rows, total.0)
            }
        };

        let systems = rows.into_iter().map(TryInto::try_into).collect::<Result<Vec<_>>>()?;
        Ok((systems, total))
    }

    async fn has_child_systems(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM systems WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 > 0)
    }

    async fn has_child_items(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items WHERE system_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 > 0)
    }

    async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs> {
        #[derive(sqlx::FromRow)]
        struct WalkRow {
            id: ObjectId,
            name: String,
            parent_id: Option<ObjectId>,
            depth: i64,
        }

        let rows: Vec<WalkRow> = sqlx::query_as(
            r#"
            WITH RECURSIVE walk AS (
                SELECT id, name, parent_id, 0::BIGINT AS depth
                FROM systems WHERE id = $1
                UNION ALL
                SELECT s.id, s.name, s.parent_id, w.depth + 1
                FROM systems s
                JOIN walk w ON s.id = w.parent_id
                WHERE w.depth + 1 < $2
            )
            SELECT id, name, parent_id, depth FROM walk ORDER BY depth DESC
            "#,
        )
        .bind(id)
        .bind(TRAIL_MAX_LENGTH as i64)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(AppError::Missing(format!("No system found with ID: '{id}'")));
        }

        let full_trail = rows[0].parent_id.is_none();
        if !full_trail && rows.len() < TRAIL_MAX_LENGTH {
            return Err(AppError::DatabaseIntegrity(format!(
                "system '{id}' has a dangling parent reference in its ancestor chain"
            )));
        }

        let trail = rows
            .into_iter()
            .map(|r| BreadcrumbEntry { id: r.id, name: r.name })
            .collect();

        Ok(Breadcrumbs { trail, full_trail })
    }

    async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool> {
        if moving_id == destination_id {
            return Ok(true);
        }

        #[derive(sqlx::FromRow)]
        struct WalkRow {
            id: ObjectId,
            parent_id: Option<ObjectId>,
        }

        let rows: Vec<WalkRow> = sqlx::query_as(
            r#"
            WITH RECURSIVE walk AS (
                SELECT id, parent_id FROM systems WHERE id = $1
                UNION ALL
                SELECT s.id, s.parent_id
                FROM systems s
                JOIN walk w ON s.id = w.parent_id
            )
            SELECT id, parent_id FROM walk
            "#,
        )
        .bind(destination_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.iter().any(|r| r.id == moving_id) {
            return Ok(true);
        }
        let reached_root = rows.last().is_some_and(|r| r.parent_id.is_none());
        Ok(!reached_root)
    }
}
