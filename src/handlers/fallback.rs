use axum::extract::Request;
use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Catch-all for requests no route matched.
pub async fn api_not_found(req: Request) -> impl IntoResponse {
    tracing::error!(method = %req.method(), url = %req.uri(), "API Not Found");

    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "API Not Found" })),
    )
}
