//! Infrastructure wiring: which store backs the estimator.

use std::sync::Arc;

use sqlx::PgPool;

use stockwatch_infra::{
    InMemoryStockStore, PostgresStockStore, StockStore, StockoutEstimator, DEFAULT_WINDOW_DAYS,
};

/// Services shared by all request handlers.
pub struct AppServices {
    pub estimator: StockoutEstimator,
}

impl AppServices {
    pub fn new(store: Arc<dyn StockStore>, window_days: u32) -> Self {
        Self {
            estimator: StockoutEstimator::new(store).with_window_days(window_days),
        }
    }
}

/// Wire services from the process environment.
///
/// `DATABASE_URL` set: Postgres-backed store (connection failure is fatal at
/// startup rather than deferred to the first request). Unset: empty in-memory
/// store, dev mode only.
pub async fn build_services() -> AppServices {
    let window_days = window_days_from_env();

    let store: Arc<dyn StockStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = PgPool::connect(&url)
                .await
                .expect("failed to connect to DATABASE_URL");
            tracing::info!("using postgres stock store");
            Arc::new(PostgresStockStore::new(pool))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using empty in-memory stock store");
            Arc::new(InMemoryStockStore::new())
        }
    };

    AppServices::new(store, window_days)
}

fn window_days_from_env() -> u32 {
    match std::env::var("STOCKOUT_WINDOW_DAYS") {
        Ok(raw) => match raw.parse::<u32>() {
            Ok(days) if days > 0 => days,
            _ => {
                tracing::warn!(
                    value = %raw,
                    "STOCKOUT_WINDOW_DAYS must be a positive integer; using default"
                );
                DEFAULT_WINDOW_DAYS
            }
        },
        Err(_) => DEFAULT_WINDOW_DAYS,
    }
}
