use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict/:item_id", get(predict))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /predict/:item_id` — stockout projection for one item.
pub async fn predict(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    match services.estimator.estimate(&item_id).await {
        Ok(estimate) => {
            (StatusCode::OK, Json(dto::PredictionResponse::from(estimate))).into_response()
        }
        Err(e) => errors::estimate_error_to_response(&item_id, e),
    }
}
