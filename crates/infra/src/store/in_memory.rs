//! In-memory stock store (dev/test wiring).

use chrono::NaiveDate;

use stockwatch_domain::{InventoryRecord, SaleRecord};

use super::{StockStore, StoreError};

/// Vec-backed stock store. Seeded up front, read-only afterwards, matching
/// the snapshot semantics of the real stores.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    inventory: Vec<InventoryRecord>,
    sales: Vec<SaleRecord>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an inventory record. Replaces any prior record for the same item.
    pub fn set_inventory(&mut self, item_id: impl Into<String>, closing_stock: i64) {
        let item_id = item_id.into();
        self.inventory.retain(|r| r.item_id != item_id);
        self.inventory.push(InventoryRecord {
            item_id,
            closing_stock,
        });
    }

    /// Seed one sale transaction.
    pub fn record_sale(&mut self, item_id: impl Into<String>, quantity: i64, sale_date: NaiveDate) {
        self.sales.push(SaleRecord {
            item_id: item_id.into(),
            quantity,
            sale_date,
        });
    }
}

#[async_trait::async_trait]
impl StockStore for InMemoryStockStore {
    async fn inventory(&self, item_id: &str) -> Result<Option<InventoryRecord>, StoreError> {
        Ok(self
            .inventory
            .iter()
            .find(|r| r.item_id == item_id)
            .cloned())
    }

    async fn sales_since(
        &self,
        item_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<SaleRecord>, StoreError> {
        Ok(self
            .sales
            .iter()
            .filter(|s| s.item_id == item_id && s.sale_date >= since)
            .cloned()
            .collect())
    }
}
