//! Per-call request overrides, response expectations and completion.
//!
//! # Design
//! Every verb takes one `impl Into<RequestOptions>`. The terse positional
//! call shapes test suites like to write are `From` conversions, so the
//! shape is picked by the compiler rather than by inspecting arguments at
//! run time:
//!
//! | argument                                       | request | expect | callback |
//! |------------------------------------------------|---------|--------|----------|
//! | `OnComplete`                                   | empty   | empty  | yes      |
//! | `ExpectedResponse`                             | empty   | given  | no       |
//! | `(RequestSpec, OnComplete)`                    | given   | empty  | yes      |
//! | `(RequestSpec, ExpectedResponse)`              | given   | given  | no       |
//! | `(RequestSpec, ExpectedResponse, OnComplete)`  | given   | given  | yes      |
//!
//! `RequestOptions` itself offers the same slots as named builder methods.

use std::fmt;

use serde_json::Value;

use crate::error::ClientError;
use crate::headers::Headers;
use crate::http::ResponseResult;
use crate::payload::Payload;

/// What a completion callback receives: the response, or the error that
/// prevented one.
pub type Outcome = Result<ResponseResult, ClientError>;

/// Overrides for the outgoing request. Empty by default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSpec {
    pub headers: Headers,
    /// Querystring data on query-only verbs, body on POST and PUT.
    pub data: Option<Payload>,
    /// Body used by POST and PUT when `data` is absent.
    pub body: Option<Payload>,
    /// Credentials as `user:pass`, replacing the client default.
    pub auth: Option<String>,
}

impl RequestSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn data(mut self, data: impl Into<Payload>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn body(mut self, body: impl Into<Payload>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn auth(mut self, credentials: impl Into<String>) -> Self {
        self.auth = Some(credentials.into());
        self
    }
}

/// What the response should look like. Every absent field is left
/// unchecked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedResponse {
    pub status: Option<u16>,
    pub headers: Headers,
    pub body: Option<String>,
    pub data: Option<Value>,
}

impl ExpectedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// A completion callback, run once with the call's `Outcome`.
pub struct OnComplete<'a>(Box<dyn FnOnce(Outcome) + 'a>);

impl<'a> OnComplete<'a> {
    pub fn new(callback: impl FnOnce(Outcome) + 'a) -> Self {
        Self(Box::new(callback))
    }

    pub(crate) fn call(self, outcome: Outcome) {
        (self.0)(outcome)
    }
}

impl fmt::Debug for OnComplete<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnComplete(..)")
    }
}

/// The canonical form every call is normalized into.
#[derive(Debug, Default)]
pub struct RequestOptions<'a> {
    pub request: RequestSpec,
    pub expect: ExpectedResponse,
    pub on_complete: Option<OnComplete<'a>>,
}

impl<'a> RequestOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.set(name, value);
        self
    }

    pub fn data(mut self, data: impl Into<Payload>) -> Self {
        self.request.data = Some(data.into());
        self
    }

    /// Structured data: a JSON body on POST and PUT, a querystring
    /// elsewhere.
    pub fn json(self, value: Value) -> Self {
        self.data(Payload::Json(value))
    }

    /// Pre-encoded text: a raw body on POST and PUT, a verbatim querystring
    /// elsewhere.
    pub fn raw(self, text: impl Into<String>) -> Self {
        self.data(Payload::Raw(text.into()))
    }

    pub fn body(mut self, body: impl Into<Payload>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    pub fn auth(mut self, credentials: impl Into<String>) -> Self {
        self.request.auth = Some(credentials.into());
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expect.status = Some(status);
        self
    }

    pub fn expect_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.expect.headers.set(name, value);
        self
    }

    pub fn expect_body(mut self, body: impl Into<String>) -> Self {
        self.expect.body = Some(body.into());
        self
    }

    pub fn expect_data(mut self, data: Value) -> Self {
        self.expect.data = Some(data);
        self
    }

    pub fn on_complete(mut self, callback: impl FnOnce(Outcome) + 'a) -> Self {
        self.on_complete = Some(OnComplete::new(callback));
        self
    }
}

impl<'a> From<OnComplete<'a>> for RequestOptions<'a> {
    fn from(on_complete: OnComplete<'a>) -> Self {
        Self {
            on_complete: Some(on_complete),
            ..Self::default()
        }
    }
}

impl From<ExpectedResponse> for RequestOptions<'_> {
    fn from(expect: ExpectedResponse) -> Self {
        Self {
            expect,
            ..Self::default()
        }
    }
}

impl<'a> From<(RequestSpec, OnComplete<'a>)> for RequestOptions<'a> {
    fn from((request, on_complete): (RequestSpec, OnComplete<'a>)) -> Self {
        Self {
            request,
            expect: ExpectedResponse::default(),
            on_complete: Some(on_complete),
        }
    }
}

impl From<(RequestSpec, ExpectedResponse)> for RequestOptions<'_> {
    fn from((request, expect): (RequestSpec, ExpectedResponse)) -> Self {
        Self {
            request,
            expect,
            on_complete: None,
        }
    }
}

impl<'a> From<(RequestSpec, ExpectedResponse, OnComplete<'a>)> for RequestOptions<'a> {
    fn from((request, expect, on_complete): (RequestSpec, ExpectedResponse, OnComplete<'a>)) -> Self {
        Self {
            request,
            expect,
            on_complete: Some(on_complete),
        }
    }
}
