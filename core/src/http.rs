//! HTTP request and response values as plain data.
//!
//! # Design
//! The request builder produces an `HttpRequest` and never touches the
//! network; a `Transport` executes it and hands back a `RawResponse`; the
//! decoder turns that into the `ResponseResult` that assertions and
//! callbacks see. All fields are owned so values move freely between
//! those stages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::config::Scheme;
use crate::headers::Headers;

/// The eight verbs the client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Head,
    Put,
    Delete,
    Trace,
    Options,
    Connect,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Head,
        Method::Put,
        Method::Delete,
        Method::Trace,
        Method::Options,
        Method::Connect,
    ];

    /// The verb as written on the request line.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
        }
    }

    /// Only POST and PUT carry a body; every other verb sends its data as a
    /// querystring.
    pub fn sends_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }

    /// Resolve a client-facing verb name. `del` and `delete` both map to
    /// DELETE.
    pub fn from_alias(name: &str) -> Option<Method> {
        let method = match name.to_ascii_lowercase().as_str() {
            "get" => Method::Get,
            "post" => Method::Post,
            "head" => Method::Head,
            "put" => Method::Put,
            "del" | "delete" => Method::Delete,
            "trace" => Method::Trace,
            "options" => Method::Options,
            "connect" => Method::Connect,
            _ => return None,
        };
        Some(method)
    }
}

/// A fully specified outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Base path, call path and querystring, exactly as sent.
    pub path: String,
    pub headers: Headers,
    pub body: Option<String>,
    /// Credentials as `user:pass`.
    pub auth: Option<String>,
    pub accept_invalid_certs: bool,
}

impl HttpRequest {
    pub fn url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme.as_str(), self.host, self.port, self.path)
    }

    /// The `authorization` header value for `auth`, using HTTP Basic.
    pub fn authorization(&self) -> Option<String> {
        self.auth
            .as_ref()
            .map(|credentials| format!("Basic {}", STANDARD.encode(credentials)))
    }
}

/// What a transport hands back: status, headers and the whole body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

/// The outcome of a completed call.
///
/// `data` holds the decoded JSON body when the response was labelled
/// `application/json` and could be parsed; it is `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResult {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
    pub data: Option<Value>,
}

impl ResponseResult {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
