use crate::config::Settings;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{cors_middleware, request_logging_middleware};
use crate::services::MongoDb;
use axum::{middleware::from_fn, routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// The fixed request pipeline, outermost stage first: access logging, CORS
/// (with preflight short-circuit), route dispatch, 404 fallback.
pub fn build_router() -> Router {
    // A method mismatch on a routed path falls through to the same 404
    // handler as an unknown path.
    Router::new()
        .route("/ping", get(handlers::ping).fallback(handlers::api_not_found))
        .fallback(handlers::api_not_found)
        .layer(from_fn(cors_middleware))
        .layer(from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    db: MongoDb,
}

impl Application {
    /// Connects to MongoDB first; the listener binds only after the
    /// connection has been verified.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let db = MongoDb::connect(&settings.mongo).await?;

        let app = build_router();

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server is running on port {}", port);

        let server = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        );

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
