use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;

/// Logs every request twice: once on receipt and once with the final status.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let url = req.uri().clone();
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        "Incoming -> Method: [{}] - URL: [{}] - IP: [{}]",
        method,
        url,
        ip
    );

    let response = next.run(req).await;

    tracing::info!(
        "Incoming -> Method: [{}] - URL: [{}] - IP: [{}] - Status: [{}]",
        method,
        url,
        ip,
        response.status().as_u16()
    );

    response
}
