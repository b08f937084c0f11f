use api_service::startup::build_router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Binds the request pipeline on an ephemeral port. The database gate is
    /// exercised separately in the startup tests; none of the routes here
    /// touch the connection.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let port = listener.local_addr().expect("Failed to read local addr").port();

        let app = build_router();
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}
