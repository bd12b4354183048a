//! `stockwatch-domain` — pure domain types and the stockout projection math.
//!
//! This crate contains **pure domain** logic (no I/O, no async). Fetching the
//! underlying records is the infra layer's job.

pub mod projection;
pub mod record;

pub use projection::{project_stockout, Projection, NO_DEPLETION_SIGNAL};
pub use record::{InventoryRecord, SaleRecord, StockoutEstimate};
