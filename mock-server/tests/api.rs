use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn content_type(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
}

// --- fixed routes ---

#[tokio::test]
async fn user_returns_charlie() {
    let resp = app().oneshot(empty_request("GET", "/user")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "application/json");
    let data: Value = body_json(resp).await;
    assert_eq!(data, json!({"name": "Charlie"}));
}

#[tokio::test]
async fn colors_sets_color_header() {
    let resp = app().oneshot(empty_request("GET", "/colors")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("color").unwrap(), "red");
}

#[tokio::test]
async fn text_is_plain() {
    let resp = app().oneshot(empty_request("GET", "/text")).await.unwrap();

    assert_eq!(content_type(&resp), "text/plain");
    assert_eq!(&body_bytes(resp).await[..], b"ok");
}

#[tokio::test]
async fn empty_is_204_without_body() {
    let resp = app().oneshot(empty_request("GET", "/empty")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn garbage_prefixes_json_with_markup() {
    let resp = app().oneshot(empty_request("GET", "/garbage")).await.unwrap();

    assert_eq!(content_type(&resp), "application/json");
    assert_eq!(&body_bytes(resp).await[..], br#"<pre>{"name":"Charlie"}"#);
}

#[tokio::test]
async fn broken_claims_json_but_is_not() {
    let resp = app().oneshot(empty_request("GET", "/broken")).await.unwrap();

    assert_eq!(content_type(&resp), "application/json");
    assert!(serde_json::from_slice::<Value>(&body_bytes(resp).await).is_err());
}

// --- status ---

#[tokio::test]
async fn status_route_answers_with_requested_code() {
    let resp = app().oneshot(empty_request("PUT", "/status/500")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let data: Value = body_json(resp).await;
    assert_eq!(data, json!({"status": 500}));
}

#[tokio::test]
async fn status_route_rejects_invalid_code() {
    let resp = app().oneshot(empty_request("GET", "/status/42")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_uri_headers_and_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/echo?x=1")
        .header("foo", "bar")
        .body("test".to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.uri, "/echo?x=1");
    assert_eq!(echo.headers.get("foo").map(String::as_str), Some("bar"));
    assert_eq!(echo.body, "test");
}

#[tokio::test]
async fn unknown_paths_echo() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/user?name=charlie"))
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert_eq!(echo.uri, "/api/user?name=charlie");
}
