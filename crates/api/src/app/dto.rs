use serde::Serialize;

use stockwatch_domain::StockoutEstimate;

/// Success body for `GET /predict/:item_id`.
///
/// Field names are part of the wire contract; `days_to_stockout` carries the
/// no-depletion sentinel as a plain float.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub item_id: String,
    pub closing_stock: i64,
    pub sales_rate_per_day: f64,
    pub days_to_stockout: f64,
}

impl From<StockoutEstimate> for PredictionResponse {
    fn from(est: StockoutEstimate) -> Self {
        Self {
            item_id: est.item_id,
            closing_stock: est.closing_stock,
            sales_rate_per_day: est.sales_rate_per_day,
            days_to_stockout: est.days_to_stockout,
        }
    }
}
