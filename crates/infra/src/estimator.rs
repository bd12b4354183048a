//! Stockout estimator: fetch, aggregate, project.
//!
//! One linear pass per request: inventory lookup, sales-window aggregation,
//! then the pure projection from `stockwatch-domain`. Pure read + compute; no
//! state is mutated anywhere.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use thiserror::Error;
use tracing::debug;

use stockwatch_domain::{project_stockout, StockoutEstimate};

use crate::store::{StockStore, StoreError};

/// Trailing sales window used when no override is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Estimator failure taxonomy.
///
/// "Found but no sales" is a normal zero-rate result, not an error; the only
/// client-level failure is a missing inventory record.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The item has no inventory record. Never answered with a fabricated
    /// zero-stock estimate.
    #[error("item not found")]
    NotFound,

    /// Reading from the data store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Produces [`StockoutEstimate`]s over an injected [`StockStore`].
pub struct StockoutEstimator {
    store: Arc<dyn StockStore>,
    window_days: u32,
}

impl StockoutEstimator {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self {
            store,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Override the trailing window length. `window_days` must be > 0.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        debug_assert!(window_days > 0, "window_days must be > 0");
        self.window_days = window_days;
        self
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Estimate against the server's current date.
    ///
    /// The window is anchored at "today", so the same item can legitimately
    /// produce different results on different days. That is the intended
    /// reporting semantics, not drift. Tests pin the date via
    /// [`Self::estimate_at`].
    pub async fn estimate(&self, item_id: &str) -> Result<StockoutEstimate, EstimateError> {
        self.estimate_at(item_id, Utc::now().date_naive()).await
    }

    /// Estimate with an explicit "today", anchoring the trailing window at
    /// `today - window_days`.
    pub async fn estimate_at(
        &self,
        item_id: &str,
        today: NaiveDate,
    ) -> Result<StockoutEstimate, EstimateError> {
        let inventory = self
            .store
            .inventory(item_id)
            .await?
            .ok_or(EstimateError::NotFound)?;

        let window_start = today
            .checked_sub_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MIN);

        let sales = self.store.sales_since(item_id, window_start).await?;
        let window_total: i64 = sales.iter().map(|s| s.quantity).sum();

        debug!(
            item_id,
            closing_stock = inventory.closing_stock,
            window_total,
            window_days = self.window_days,
            "computed sales window"
        );

        let projection = project_stockout(inventory.closing_stock, window_total, self.window_days);

        Ok(StockoutEstimate {
            item_id: inventory.item_id,
            closing_stock: inventory.closing_stock,
            sales_rate_per_day: projection.sales_rate_per_day,
            days_to_stockout: projection.days_to_stockout,
        })
    }
}
