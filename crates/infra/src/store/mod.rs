//! Read access to the external inventory and sales-ledger stores.

use chrono::NaiveDate;
use thiserror::Error;

use stockwatch_domain::{InventoryRecord, SaleRecord};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryStockStore;
pub use postgres::PostgresStockStore;

/// Data-store failure while reading inventory or sales.
///
/// Never retried here: a fetch failure propagates to the caller so transient
/// store trouble stays visible.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database query failed.
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Read-only view over the two upstream stores this service consumes.
///
/// Both stores are owned by external systems; implementations never write.
#[async_trait::async_trait]
pub trait StockStore: Send + Sync {
    /// Fetch the inventory record for `item_id`, if one exists.
    async fn inventory(&self, item_id: &str) -> Result<Option<InventoryRecord>, StoreError>;

    /// Fetch all sales of `item_id` with `sale_date >= since`.
    async fn sales_since(
        &self,
        item_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<SaleRecord>, StoreError>;
}
