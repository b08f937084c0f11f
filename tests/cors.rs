mod common;

use common::TestApp;
use reqwest::{Client, Method};

#[tokio::test]
async fn options_preflight_short_circuits_with_empty_body() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .request(Method::OPTIONS, format!("{}/anything", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let headers = response.headers().clone();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("Missing allow-origin header"),
        "*"
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .expect("Missing allow-headers header"),
        "Origin, X-Requested-With, Content-Type, Accept, Authorization"
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .expect("Missing allow-methods header"),
        "PUT, POST, PATCH, DELETE, GET"
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn preflight_answers_even_for_routed_paths() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .request(Method::OPTIONS, format!("{}/ping", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn non_options_requests_do_not_advertise_methods() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ping", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response
        .headers()
        .get("access-control-allow-methods")
        .is_none());
}
