//! Declarative HTTP calls for tests.
//!
//! # Overview
//! A `TestHttpClient` sends one request per call and checks the response
//! against what the call said to expect: status, a subset of headers, the
//! raw body, and the decoded JSON data. Client-wide defaults (host, port,
//! base path, headers, expected status, credentials) live in an immutable
//! `ClientConfig`.
//!
//! # Design
//! - Request building, body decoding and assertions are pure functions over
//!   plain data (`HttpRequest`, `RawResponse`, `ResponseResult`); only the
//!   `Transport` does I/O.
//! - Failures are never raised out of a call. Transport errors go to the
//!   completion callback or become a failing assertion; malformed JSON just
//!   leaves `data` empty.
//! - What a failed check means is up to the `AssertionContext`.
//!
//! ```no_run
//! use http_expect::{ClientOptions, ExpectedResponse, PanicOnFailure, TestHttpClient};
//! use serde_json::json;
//!
//! let api = TestHttpClient::new(ClientOptions::new().host("127.0.0.1").port(3600));
//! api.get(
//!     Some(&mut PanicOnFailure),
//!     "/user",
//!     ExpectedResponse::new().status(200).data(json!({"name": "Charlie"})),
//! );
//! ```

pub mod assertions;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod headers;
pub mod http;
pub mod options;
pub mod payload;
pub mod request;
pub mod transport;

pub use assertions::{run_assertions, AssertionContext, AssertionReport, Failure, PanicOnFailure};
pub use client::TestHttpClient;
pub use config::{ClientConfig, ClientOptions, Scheme};
pub use decode::decode_response;
pub use error::ClientError;
pub use headers::Headers;
pub use http::{HttpRequest, Method, RawResponse, ResponseResult};
pub use options::{ExpectedResponse, OnComplete, Outcome, RequestOptions, RequestSpec};
pub use payload::Payload;
pub use request::build_request;
pub use transport::Transport;

#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
