use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockwatch_infra::EstimateError;

/// Map estimator failures to HTTP responses.
///
/// Unknown item is a client-visible 404; a store failure surfaces as 502
/// rather than being masked, so "item unknown" and "system unavailable" stay
/// distinguishable to callers.
pub fn estimate_error_to_response(item_id: &str, err: EstimateError) -> axum::response::Response {
    match err {
        EstimateError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        EstimateError::Store(e) => {
            tracing::error!(item_id, error = %e, "stock store query failed");
            json_error(
                StatusCode::BAD_GATEWAY,
                "upstream_unavailable",
                "stock store unavailable",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
