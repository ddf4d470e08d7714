//! PostgreSQL-backed repositories for the dimension entities (§4.6).

use async_trait::async_trait;
use inventory_service_core::domains::dimension::{Manufacturer, Unit, UsageStatus};
use inventory_service_core::repositories::dimension::{
    ManufacturerRepository, UnitRepository, UsageStatusRepository,
};
use inventory_service_core::Result;
use shared_types::ObjectId;
use sqlx::PgPool;

use crate::rows::{ManufacturerRow, UnitRow, UsageStatusRow};

pub struct UnitRepositoryImpl {
    pool: PgPool,
}

impl UnitRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitRepository for UnitRepositoryImpl {
    async fn create(&self, unit: Unit) -> Result<Unit> {
        let row: UnitRow = sqlx::query_as(
            r#"
            INSERT INTO units (id, value, code, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, value, code, created_time, modified_time
            "#,
        )
        .bind(unit.id)
        .bind(&unit.value)
        .bind(&unit.code)
        .bind(unit.created_time)
        .bind(unit.modified_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Unit>> {
        let row: Option<UnitRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM units WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Unit>> {
        let row: Option<UnitRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM units WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<Unit>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;
        let rows: Vec<UnitRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM units \
             ORDER BY value ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM units")
            .fetch_one(&self.pool)
            .await?;
        Ok((row_vec_into(rows), total.0))
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_referenced_by_any_category(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM catalogue_categories
            WHERE EXISTS (
                SELECT 1 FROM jsonb_array_elements(properties) elem
                WHERE elem->>'unit_id' = $1
            )
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0 > 0)
    }
}

pub struct UsageStatusRepositoryImpl {
    pool: PgPool,
}

impl UsageStatusRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageStatusRepository for UsageStatusRepositoryImpl {
    async fn create(&self, status: UsageStatus) -> Result<UsageStatus> {
        let row: UsageStatusRow = sqlx::query_as(
            r#"
            INSERT INTO usage_statuses (id, value, code, created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, value, code, created_time, modified_time
            "#,
        )
        .bind(status.id)
        .bind(&status.value)
        .bind(&status.code)
        .bind(status.created_time)
        .bind(status.modified_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UsageStatus>> {
        let row: Option<UsageStatusRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM usage_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UsageStatus>> {
        let row: Option<UsageStatusRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM usage_statuses WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<UsageStatus>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;
        let rows: Vec<UsageStatusRow> = sqlx::query_as(
            "SELECT id, value, code, created_time, modified_time FROM usage_statuses \
             ORDER BY value ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usage_statuses")
            .fetch_one(&self.pool)
            .await?;
        Ok((row_vec_into(rows), total.0))
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM usage_statuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_referenced_by_any_item(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items WHERE usage_status_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 > 0)
    }
}

pub struct ManufacturerRepositoryImpl {
    pool: PgPool,
}

impl ManufacturerRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const MANUFACTURER_COLUMNS: &str = "id, name, code, url, address_building_number, \
    address_street_name, address_town, address_county, address_country, address_postcode, \
    telephone, created_time, modified_time";

#[async_trait]
impl ManufacturerRepository for ManufacturerRepositoryImpl {
    async fn create(&self, manufacturer: Manufacturer) -> Result<Manufacturer> {
        let row: ManufacturerRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO manufacturers
                (id, name, code, url, address_building_number, address_street_name,
                 address_town, address_county, address_country, address_postcode, telephone,
                 created_time, modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {MANUFACTURER_COLUMNS}
            "#
        ))
        .bind(manufacturer.id)
        .bind(&manufacturer.name)
        .bind(&manufacturer.code)
        .bind(&manufacturer.url)
        .bind(&manufacturer.address_building_number)
        .bind(&manufacturer.address_street_name)
        .bind(&manufacturer.address_town)
        .bind(&manufacturer.address_county)
        .bind(&manufacturer.address_country)
        .bind(&manufacturer.address_postcode)
        .bind(&manufacturer.telephone)
        .bind(manufacturer.created_time)
        .bind(manufacturer.modified_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Manufacturer>> {
        let row: Option<ManufacturerRow> = sqlx::query_as(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Manufacturer>> {
        let row: Option<ManufacturerRow> = sqlx::query_as(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn update(&self, manufacturer: Manufacturer) -> Result<Manufacturer> {
        let row: ManufacturerRow = sqlx::query_as(&format!(
            r#"
            UPDATE manufacturers
            SET name = $2, code = $3, url = $4, address_building_number = $5,
                address_street_name = $6, address_town = $7, address_county = $8,
                address_country = $9, address_postcode = $10, telephone = $11, modified_time = $12
            WHERE id = $1
            RETURNING {MANUFACTURER_COLUMNS}
            "#
        ))
        .bind(manufacturer.id)
        .bind(&manufacturer.name)
        .bind(&manufacturer.code)
        .bind(&manufacturer.url)
        .bind(&manufacturer.address_building_number)
        .bind(&manufacturer.address_street_name)
        .bind(&manufacturer.address_town)
        .bind(&manufacturer.address_county)
        .bind(&manufacturer.address_country)
        .bind(&manufacturer.address_postcode)
        .bind(&manufacturer.telephone)
        .bind(manufacturer.modified_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<Manufacturer>, i64)> {
        let offset = ((page.saturating_sub(1)) * page_size) as i64;
        let limit = page_size as i64;
        let rows: Vec<ManufacturerRow> = sqlx::query_as(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers ORDER BY name ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM manufacturers")
            .fetch_one(&self.pool)
            .await?;
        Ok((row_vec_into(rows), total.0))
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_referenced_by_any_catalogue_item(&self, id: ObjectId) -> Result<bool> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM catalogue_items WHERE manufacturer_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.0 > 0)
    }
}

fn row_vec_into<R, T>(rows: Vec<R>) -> Vec<T>
where
    R: Into<T>,
{
    rows.into_iter().map(Into::into).collect()
}
