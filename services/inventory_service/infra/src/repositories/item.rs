//! PostgreSQL-backed `ItemRepository` (§4.4).

use async_trait::async_trait;
use inventory_service_core::domains::item::Item;
use inventory_service_core::repositories::item::ItemRepository;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;
use sqlx::PgPool;

use crate::rows::ItemRow;

const COLUMNS: &str = "id, catalogue_item_id, system_id, usage_status_id, usage_status, \
    purchase_order_number, warranty_end_date, asset_number, serial_number, delivered_date, \
    is_defective, notes, properties, created_time, modified_time";

pub struct ItemRepositoryImpl {
    pool: PgPool,
}

impl ItemRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create(&self, item: Item) -> Result<Item> {
        let properties = serde_json::to_value(&item.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: ItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO items
                (id, catalogue_item_id, system_id, usage_status_id, usage_status,
                 purchase_order_number, warranty_end_date, asset_number, serial_number,
                 delivered_date, is_defective, notes, properties, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.catalogue_item_id)
        .bind(item.system_id)
        .bind(item.usage_status_id)
        .bind(&item.usage_status)
        .bind(&item.purchase_order_number)
        .bind(item.warranty_end_date)
        .bind(&item.asset_number)
        .bind(&item.serial_number)
        .bind(item.delivered_date)
        .bind(item.is_defective)
        .bind(&item.notes)
        .bind(properties)
        .bind(item.created_time)
        .bind(item.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(&format!("SELECT {COLUMNS} FROM items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, item: Item) -> Result<Item> {
        let properties = serde_json::to_value(&item.properties)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: ItemRow = sqlx::query_as(&format!(
            r#"
            UPDATE items
            SET catalogue_item_id = $2, system_id = $3, usage_status_id = $4, usage_status = $5,
                purchase_order_number = $6, warranty_end_date = $7, asset_number = $8,
                serial_number = $9, delivered_date = $10, is_defective = $11, notes = $12,
                properties = $13, modified_time = $14
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.catalogue_item_id)
        .bind(item.system_id)
        .bind(item.usage_status_id)
        .bind(&item.usage_status)
        .bind(&item.purchase_order_number)
        .bind(item.warranty_end_date)
        .bind(&item.asset_number)
        .bind(&item.serial_number)
        .bind(item.delivered_date)
        .bind(item.is_defective)
        .bind(&item.notes)
        .bind(properties)
        .bind(item.modified_time)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        catalogue_item_id: Option<ObjectId>,
        system_id: Option<ObjectId>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Item>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;

        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS} FROM items
            WHERE ($1::CHAR(24) IS NULL OR catalogue_item_id = $1)
              AND ($2::CHAR(24) IS NULL OR system_id = $2)
            ORDER BY created_time ASC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(catalogue_item_id)
        .bind(system_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM items
            WHERE ($1::CHAR(24) IS NULL OR catalogue_item_id = $1)
              AND ($2::CHAR(24) IS NULL OR system_id = $2)
            "#,
        )
        .bind(catalogue_item_id)
        .bind(system_id)
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(TryInto::try_into).collect::<Result<Vec<_>>>()?;
        Ok((items, total.0))
    }
}
