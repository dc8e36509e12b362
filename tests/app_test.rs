mod common;

use common::TestApp;
use reqwest::{header, StatusCode};
use serde_json::json;

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[tokio::test]
async fn spawned_app_binds_a_random_port() {
    let app = TestApp::spawn().await;

    assert_ne!(app.port, 0);
    assert_eq!(app.address, format!("http://127.0.0.1:{}", app.port));
}

#[tokio::test]
async fn post_over_http_returns_the_invoice_pdf() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "invoiceNumber": "F-020",
        "clientName": "Transportes Rivas",
        "items": [{ "description": "Flete", "quantity": 2, "unitPrice": 50, "total": 100 }],
        "subtotal": 100,
        "tax": 16,
        "totalAmount": 116
    });

    let response = reqwest::Client::new()
        .post(app.url("/pdf"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=invoice.pdf"
    );

    let body = response.bytes().await.unwrap();
    assert!(body.starts_with(b"%PDF-"));
    assert!(contains(&body, b"(Factura #F-020)"));
}

#[tokio::test]
async fn malformed_post_over_http_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let response = reqwest::Client::new()
        .post(app.url("/pdf"))
        .header(header::CONTENT_TYPE, "application/json")
        .body("{\"items\": [")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_over_http_reports_ok() {
    let app = TestApp::spawn().await;

    let response = reqwest::get(app.url("/health"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
