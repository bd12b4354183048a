use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current on-hand quantity for one item, as of the last external inventory
/// sync. Owned and mutated entirely by the upstream inventory system; this
/// service only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_id: String,
    /// Units on hand. Never negative in well-formed upstream data.
    pub closing_stock: i64,
}

/// One recorded sale transaction, owned by the upstream sales ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub item_id: String,
    pub quantity: i64,
    pub sale_date: NaiveDate,
}

/// Derived stockout projection for one item. Computed fresh per request,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockoutEstimate {
    pub item_id: String,
    pub closing_stock: i64,
    /// Average units sold per day over the trailing window, rounded to
    /// 2 decimal places.
    pub sales_rate_per_day: f64,
    /// Projected days until stock reaches zero at the current rate, rounded
    /// to 1 decimal place. [`crate::NO_DEPLETION_SIGNAL`] when no depletion
    /// signal is available.
    pub days_to_stockout: f64,
}
