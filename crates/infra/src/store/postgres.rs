//! Postgres-backed stock store.
//!
//! Two read queries against tables owned by external systems: `inventory`
//! (at most one row per item) and `sales` (many rows per item).

use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use stockwatch_domain::{InventoryRecord, SaleRecord};

use super::{StockStore, StoreError};

/// Stock store over a shared Postgres connection pool.
pub struct PostgresStockStore {
    pool: PgPool,
}

impl PostgresStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StockStore for PostgresStockStore {
    async fn inventory(&self, item_id: &str) -> Result<Option<InventoryRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT item_id, closing_stock
            FROM inventory
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(InventoryRecord {
                item_id: row.try_get("item_id")?,
                closing_stock: row.try_get("closing_stock")?,
            })),
            None => Ok(None),
        }
    }

    async fn sales_since(
        &self,
        item_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<SaleRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, quantity, sale_date
            FROM sales
            WHERE item_id = $1 AND sale_date >= $2
            "#,
        )
        .bind(item_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        let mut sales = Vec::with_capacity(rows.len());
        for row in rows {
            sales.push(SaleRecord {
                item_id: row.try_get("item_id")?,
                quantity: row.try_get("quantity")?,
                sale_date: row.try_get("sale_date")?,
            });
        }
        Ok(sales)
    }
}
