//! In-process router tests over a lazily-connected pool.
//!
//! No MySQL server is running here: routes that reach the database exercise
//! the failure contract (500 + plain-text message), everything else is
//! asserted hermetically.

use axum::http::{self, Request, StatusCode};
use axum::Router;
use cadastro_api::{app, AppState};
use http_body_util::BodyExt;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;
use tower::ServiceExt;

fn test_app() -> Router {
    // Port 1 is never MySQL; acquire fails fast instead of queueing 30s.
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("mysql://root@127.0.0.1:1/crudapi")
        .expect("lazy pool");
    app(AppState::new(pool))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let resp = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn version_reports_crate() {
    let resp = test_app().oneshot(get("/version")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["name"], "cadastro-api");
}

#[tokio::test]
async fn ready_degrades_without_database() {
    let resp = test_app().oneshot(get("/ready")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let v = body_json(resp).await;
    assert_eq!(v["status"], "degraded");
}

#[tokio::test]
async fn docs_page_serves_swagger_shell() {
    let resp = test_app().oneshot(get("/docs")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("swagger-ui"));
    assert!(body.contains("/docs/openapi.json"));
}

#[tokio::test]
async fn openapi_document_lists_operations() {
    let resp = test_app().oneshot(get("/docs/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    let paths = v["paths"].as_object().unwrap();
    assert!(paths.contains_key("/{resource}"));
    assert!(paths.contains_key("/{resource}/{id}"));
    assert!(v["paths"]["/{resource}"]["post"].is_object());
    assert!(v["paths"]["/{resource}/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn unknown_resource_is_404() {
    let resp = test_app().oneshot(get("/clientes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(body.contains("unknown resource: clientes"));
}

#[tokio::test]
async fn unknown_resource_by_id_is_404() {
    let resp = test_app().oneshot(get("/clientes/7")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let resp = test_app().oneshot(get("/usuarios/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("invalid id: abc"));
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_400() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/alunos/xyz")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_array_body_is_400() {
    let resp = test_app()
        .oneshot(json_request("POST", "/usuarios", "[1, 2]"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("body must be a JSON object"));
}

#[tokio::test]
async fn database_failure_is_plain_text_500() {
    let resp = test_app().oneshot(get("/usuarios")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = resp
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let body = body_string(resp).await;
    assert!(body.starts_with("database:"));
}

#[tokio::test]
async fn update_surfaces_database_failure_after_field_mapping() {
    // Body parsing succeeds; the statement itself fails on the dead pool.
    let resp = test_app()
        .oneshot(json_request(
            "PUT",
            "/usuarios/7",
            r#"{"nome":"Ana B","idade":21}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
