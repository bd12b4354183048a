//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store selection (Postgres vs in-memory) and estimator wiring
//! - `routes.rs`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router from environment configuration (public
/// entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    build_app_with_services(services)
}

/// Build the router over pre-wired services. Tests use this to substitute a
/// seeded in-memory store for the real database.
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
