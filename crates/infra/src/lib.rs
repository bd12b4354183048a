//! Infrastructure layer: data-store access and the estimator wiring on top
//! of it.

pub mod estimator;
pub mod store;

pub use estimator::{EstimateError, StockoutEstimator, DEFAULT_WINDOW_DAYS};
pub use store::{InMemoryStockStore, PostgresStockStore, StockStore, StoreError};
