use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What `/echo` (and every unknown path) reports back about the request it
/// received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/user", get(user))
        .route("/colors", get(colors))
        .route("/text", get(text))
        .route("/empty", any(empty))
        .route("/garbage", get(garbage))
        .route("/broken", get(broken))
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn user() -> Json<Value> {
    Json(json!({ "name": "Charlie" }))
}

async fn colors() -> impl IntoResponse {
    ([("color", "red")], Json(json!({ "color": "red" })))
}

async fn text() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "ok")
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn garbage() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"<pre>{"name":"Charlie"}"#,
    )
}

async fn broken() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "not json at all")
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))))
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.as_str().to_string(),
        uri: uri.to_string(),
        headers,
        body,
    })
}
