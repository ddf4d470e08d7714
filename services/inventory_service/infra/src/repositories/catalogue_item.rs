//! PostgreSQL-backed `CatalogueItemRepository` (§4.4).

use async_trait::async_trait;
use inventory_service_core::domains::catalogue_item::CatalogueItem;
use inventory_service_core::repositories::catalogue_item::CatalogueItemRepository;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;
use sqlx::PgPool;

use crate::rows::CatalogueItemRow;

const COLUMNS: &str = "id, catalogue_category_id, manufacturer_id, name, description, cost_gbp, \
    cost_to_rework_gbp, days_to_replace, days_to_rework, drawing_number, drawing_link, \
    item_model_number, notes, is_obsolete, obsolete_reason, obsolete_replacement_catalogue_item_id, \
    properties, created_time, modified_time";

pub struct CatalogueItemRepositoryImpl {
    pool: PgPool,
}

impl CatalogueItemRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogueItemRepository for CatalogueItemRepositoryImpl {
    async fn create(&self, item: CatalogueItem) -> Result<CatalogueItem> {
        let properties = serde_json::to_value(&item.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: CatalogueItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO catalogue_items
                (id, catalogue_category_id, manufacturer_id, name, description, cost_gbp,
                 cost_to_rework_gbp, days_to_replace, days_to_rework, drawing_number,
                 drawing_link, item_model_number, notes, is_obsolete, obsolete_reason,
                 obsolete_replacement_catalogue_item_id, properties, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.catalogue_category_id)
        .bind(item.manufacturer_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.cost_gbp)
        .bind(item.cost_to_rework_gbp)
        .bind(item.days_to_replace)
        .bind(item.days_to_rework)
        .bind(&item.drawing_number)
        .bind(&item.drawing_link)
        .bind(&item.item_model_number)
        .bind(&item.notes)
        .bind(item.is_obsolete)
        .bind(&item.obsolete_reason)
        .bind(item.obsolete_replacement_catalogue_item_id)
        .bind(properties)
        .bind(item.created_time)
        .bind(item.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueItem>> {
        let row: Option<CatalogueItemRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM catalogue_items WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, item: CatalogueItem) -> Result<CatalogueItem> {
        let properties = serde_json::to_value(&item.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: CatalogueItemRow = sqlx::query_as(&format!(
            r#"
            UPDATE catalogue_items
            SET catalogue_category_id = $2, manufacturer_id = $3, name = $4, description = $5,
                cost_gbp = $6, cost_to_rework_gbp = $7, days_to_replace = $8, days_to_rework = $9,
                drawing_number = $10, drawing_link = $11, item_model_number = $12, notes = $13,
                is_obsolete = $14, obsolete_reason = $15,
                obsolete_replacement_catalogue_item_id = $16, properties = $17, modified_time = $18
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.catalogue_category_id)
        .bind(item.manufacturer_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.cost_gbp)
        .bind(item.cost_to_rework_gbp)
        .bind(item.days_to_replace)
        .bind(item.days_to_rework)
        .bind(&item.drawing_number)
        .bind(&item.drawing_link)
        .bind(&item.item_model_number)
        .bind(&item.notes)
        .bind(item.is_obsolete)
        .bind(&item.obsolete_reason)
        .bind(item.obsolete_replacement_catalogue_item_id)
        .bind(properties)
        .bind(item.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM catalogue_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        catalogue_category_id: Option<ObjectId>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<CatalogueItem>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;

        let (rows, total): (Vec<CatalogueItemRow>, i64) = match catalogue_category_id {
            Some(cat_id) => {
                let rows = sqlx::query_as(&format!(
                    "SELECT {COLUMNS} FROM catalogue_items WHERE catalogue_category_id = $1 \
                     ORDER BY name ASC LIMIT $2 OFFSET $3"
                ))
                .bind(cat_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM catalogue_items WHERE catalogue_category_id = $1",
                )
                .bind(cat_id)
                .fetch_one(&self.pool)
                .await?;
                (rows, total.0)
            }
            None => {
                let rows = sqlx::query_as(&format!(
                    "SELECT {COLUMNS} FROM catalogue_items ORDER BY name ASC LIMIT $1 OFFSET $2"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM catalogue_items")
                    .fetch_one(&self.pool)
                    .await?;
                (rows, total.0)
            }
        };

        let items = rows.into_iter().map(TryInto::try_into).collect::<Result<Vec<_>>>()?;
        Ok((items, total))
    }

    async fn list_ids_by_category(&self, catalogue_category_id: ObjectId) -> Result<Vec<ObjectId>> {
        let rows: Vec<(ObjectId,)> =
            sqlx::query_as("SELECT id FROM catalogue_items WHERE catalogue_category_id = $1")
                .bind(catalogue_category_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn has_items(&self, catalogue_item_id: ObjectId) -> Result<bool> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items WHERE catalogue_item_id = $1")
            .bind(catalogue_item_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 > 0)
    }
}
