//! PostgreSQL-backed `CatalogueCategoryRepository` (§4.1, §4.3, §4.5).

use async_trait::async_trait;
use chrono::Utc;
use inventory_service_core::domains::category::{
    BreadcrumbEntry, Breadcrumbs, CatalogueCategory, TRAIL_MAX_LENGTH,
};
use inventory_service_core::domains::property::{Property, PropertyScalar};
use inventory_service_core::repositories::category::{CatalogueCategoryRepository, ParentFilter};
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;
use sqlx::PgPool;

use crate::rows::CatalogueCategoryRow;

pub struct CatalogueCategoryRepositoryImpl {
    pool: PgPool,
}

impl CatalogueCategoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogueCategoryRepository for CatalogueCategoryRepositoryImpl {
    async fn create(&self, category: CatalogueCategory) -> Result<CatalogueCategory> {
        let properties = serde_json::to_value(&category.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: CatalogueCategoryRow = sqlx::query_as(
            r#"
            INSERT INTO catalogue_categories
                (id, name, code, parent_id, is_leaf, properties, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.code)
        .bind(category.parent_id)
        .bind(category.is_leaf)
        .bind(properties)
        .bind(category.created_time)
        .bind(category.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueCategory>> {
        let row: Option<CatalogueCategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            FROM catalogue_categories WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_parent_and_code(
        &self,
        parent_id: Option<ObjectId>,
        code: &str,
    ) -> Result<Option<CatalogueCategory>> {
        let row: Option<CatalogueCategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            FROM catalogue_categories
            WHERE code = $2 AND parent_id IS NOT DISTINCT FROM $1
            "#,
        )
        .bind(parent_id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, category: CatalogueCategory) -> Result<CatalogueCategory> {
        let properties = serde_json::to_value(&category.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: CatalogueCategoryRow = sqlx::query_as(
            r#"
            UPDATE catalogue_categories
            SET name = $2, code = $3, parent_id = $4, is_leaf = $5, properties = $6,
                modified_time = $7
            WHERE id = $1
            RETURNING id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.code)
        .bind(category.parent_id)
        .bind(category.is_leaf)
        .bind(properties)
        .bind(category.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM catalogue_categories WHERE id = $1")
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
    ) -> Result<(Vec<CatalogueCategory>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;

        let (rows, total): (Vec<CatalogueCategoryRow>, i64) = match filter {
            ParentFilter::Any => {
                let rows = sqlx::query_as(
                    r#"
                    SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
                    FROM catalogue_categories ORDER BY name ASC LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM catalogue_categories")
                    .fetch_one(&self.pool)
                    .await?;
                (rows, total.0)
            }
            ParentFilter::Root => {
                let rows = sqlx::query_as(
                    r#"
                    SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
                    FROM catalogue_categories WHERE parent_id IS NULL
                    ORDER BY name ASC LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM catalogue_categories WHERE parent_id IS NULL",
                )
                .fetch_one(&self.pool)
                .await?;
                (rows, total.0)
            }
            ParentFilter::Under(parent_id) => {
                let rows = sqlx::query_as(
                    r#"
                    SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
                    FROM catalogue_categories WHERE parent_id = $1
                    ORDER BY name ASC LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(parent_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM catalogue_categories WHERE parent_id = $1",
                )
                .bind(parent_id)
                .fetch_one(&self.pool)
                .await?;
                (rows, total.0)
            }
        };

        let categories = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>>>()?;
        Ok((categories, total))
    }

    async fn has_child_categories(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM catalogue_categories WHERE parent_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.0 > 0)
    }

    async fn has_child_catalogue_items(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM catalogue_items WHERE catalogue_category_id = $1")
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
                FROM catalogue_categories WHERE id = $1
                UNION ALL
                SELECT c.id, c.name, c.parent_id, w.depth + 1
                FROM catalogue_categories c
                JOIN walk w ON c.id = w.parent_id
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
            return Err(AppError::Missing(format!(
                "No catalogue category found with ID: '{id}'"
            )));
        }

        let full_trail = rows[0].parent_id.is_none();
        if !full_trail && rows.len() < TRAIL_MAX_LENGTH {
            return Err(AppError::DatabaseIntegrity(format!(
                "catalogue category '{id}' has a dangling parent reference in its ancestor chain"
            )));
        }

        let trail = rows
            .into_iter()
            .map(|r| BreadcrumbEntry {
                id: r.id,
                name: r.name,
            })
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
                SELECT id, parent_id FROM catalogue_categories WHERE id = $1
                UNION ALL
                SELECT c.id, c.parent_id
                FROM catalogue_categories c
                JOIN walk w ON c.id = w.parent_id
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

    async fn add_property(
        &self,
        category_id: ObjectId,
        property: Property,
        default_value: Option<PropertyScalar>,
    ) -> Result<CatalogueCategory> {
        let mut tx = self.pool.begin().await?;

        let row: CatalogueCategoryRow = sqlx::query_as(
            r#"
            SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            FROM catalogue_categories WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;
        let mut category: CatalogueCategory = row.try_into()?;

        category.properties.push(property.clone());
        category.modified_time = Utc::now();
        let properties_json = serde_json::to_value(&category.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        sqlx::query(
            "UPDATE catalogue_categories SET properties = $1, modified_time = $2 WHERE id = $3",
        )
        .bind(properties_json)
        .bind(category.modified_time)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        let new_value = inventory_service_core::domains::property::PropertyValue {
            id: property.id,
            name: property.name.clone(),
            unit_id: property.unit_id,
            unit: property.unit.clone(),
            value: default_value,
        };
        let new_value_json =
            serde_json::to_value(&new_value).map_err(|e| AppError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            UPDATE catalogue_items
            SET properties = properties || jsonb_build_array($1::jsonb)
            WHERE catalogue_category_id = $2
            "#,
        )
        .bind(&new_value_json)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE items
            SET properties = properties || jsonb_build_array($1::jsonb)
            WHERE catalogue_item_id IN (
                SELECT id FROM catalogue_items WHERE catalogue_category_id = $2
            )
            "#,
        )
        .bind(&new_value_json)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(category)
    }

    async fn update_property(
        &self,
        category_id: ObjectId,
        property: Property,
        rename_occurred: bool,
    ) -> Result<CatalogueCategory> {
        let mut tx = self.pool.begin().await?;

        let row: CatalogueCategoryRow = sqlx::query_as(
            r#"
            SELECT id, name, code, parent_id, is_leaf, properties, created_time, modified_time
            FROM catalogue_categories WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;
        let mut category: CatalogueCategory = row.try_into()?;

        let slot = category
            .properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| {
                AppError::Missing(format!(
                    "No property found with ID: '{}' in catalogue category '{category_id}'",
                    property.id
                ))
            })?;
        *slot = property.clone();
        category.modified_time = Utc::now();

        let properties_json = serde_json::to_value(&category.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        sqlx::query(
            "UPDATE catalogue_categories SET properties = $1, modified_time = $2 WHERE id = $3",
        )
        .bind(properties_json)
        .bind(category.modified_time)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        if rename_occurred {
            let pid = property.id.to_string();

            sqlx::query(
                r#"
                UPDATE catalogue_items
                SET properties = COALESCE((
                    SELECT jsonb_agg(
                        CASE WHEN elem->>'id' = $1
                        THEN jsonb_set(elem, '{name}', to_jsonb($2::text))
                        ELSE elem END
                    )
                    FROM jsonb_array_elements(properties) elem
                ), '[]'::jsonb)
                WHERE catalogue_category_id = $3
                "#,
            )
            .bind(&pid)
            .bind(&property.name)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                UPDATE items
                SET properties = COALESCE((
                    SELECT jsonb_agg(
                        CASE WHEN elem->>'id' = $1
                        THEN jsonb_set(elem, '{name}', to_jsonb($2::text))
                        ELSE elem END
                    )
                    FROM jsonb_array_elements(properties) elem
                ), '[]'::jsonb)
                WHERE catalogue_item_id IN (
                    SELECT id FROM catalogue_items WHERE catalogue_category_id = $3
                )
                "#,
            )
            .bind(&pid)
            .bind(&property.name)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(category)
    }
}
