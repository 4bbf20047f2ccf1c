//! `TestHttpClient`: one call declares a request and what its response
//! should look like.
//!
//! # Design
//! Each verb runs the same pipeline: normalize the call into
//! `RequestOptions`, build the request from the shared `ClientConfig`,
//! send it through the `Transport`, decode the body, run the assertion
//! battery, then complete. The config is never mutated, so one client can
//! serve any number of calls.
//!
//! Completion is explicit: a callback if the call supplied one, otherwise a
//! `done` signal on the assertion context, otherwise nothing. Passing `None`
//! as the context turns assertions off but never suppresses the callback.

use crate::assertions::{run_assertions, AssertionContext};
use crate::config::ClientConfig;
use crate::decode::decode_response;
use crate::error::ClientError;
use crate::http::{HttpRequest, Method, RawResponse, ResponseResult};
use crate::options::{OnComplete, RequestOptions};
use crate::request::build_request;
use crate::transport::Transport;

#[cfg(feature = "ureq")]
use crate::transport::UreqTransport;

/// How a call hands back control once it has an outcome.
enum Completion<'c, 'a> {
    Callback(OnComplete<'a>),
    Signal(&'c mut dyn AssertionContext),
    Dropped,
}

impl<'c, 'a> Completion<'c, 'a> {
    fn select(on_complete: Option<OnComplete<'a>>, ctx: Option<&'c mut dyn AssertionContext>) -> Self {
        match (on_complete, ctx) {
            (Some(callback), _) => Completion::Callback(callback),
            (None, Some(ctx)) => Completion::Signal(ctx),
            (None, None) => Completion::Dropped,
        }
    }
}

#[cfg(feature = "ureq")]
pub struct TestHttpClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

#[cfg(not(feature = "ureq"))]
pub struct TestHttpClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "ureq")]
impl TestHttpClient<UreqTransport> {
    pub fn new(config: impl Into<ClientConfig>) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> TestHttpClient<T> {
    pub fn with_transport(config: impl Into<ClientConfig>, transport: T) -> Self {
        Self {
            config: config.into(),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Get, ctx, path, options)
    }

    pub fn post<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Post, ctx, path, options)
    }

    pub fn head<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Head, ctx, path, options)
    }

    pub fn put<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Put, ctx, path, options)
    }

    /// DELETE. Also available as [`delete`](Self::delete).
    pub fn del<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Delete, ctx, path, options)
    }

    pub fn delete<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.del(ctx, path, options)
    }

    pub fn trace<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Trace, ctx, path, options)
    }

    pub fn options<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Options, ctx, path, options)
    }

    pub fn connect<'a>(&self, ctx: Option<&mut dyn AssertionContext>, path: &str, options: impl Into<RequestOptions<'a>>) {
        self.request(Method::Connect, ctx, path, options)
    }

    /// Issue one call. Never panics on transport failure and never returns
    /// an error; the outcome goes to the callback or the context.
    pub fn request<'a>(
        &self,
        method: Method,
        mut ctx: Option<&mut dyn AssertionContext>,
        path: &str,
        options: impl Into<RequestOptions<'a>>,
    ) {
        let RequestOptions {
            request,
            expect,
            on_complete,
        } = options.into();

        let outcome = build_request(&self.config, method, path, &request).and_then(|req| self.exchange(&req));

        let result = match outcome {
            Ok(raw) => decode_response(raw, self.config.debug()),
            Err(err) => return self.fail(err, Completion::select(on_complete, ctx)),
        };

        if let Some(ctx) = ctx.as_deref_mut() {
            run_assertions(ctx, &expect, &self.config, &result);
        }

        match Completion::select(on_complete, ctx) {
            Completion::Callback(callback) => callback.call(Ok(result)),
            Completion::Signal(ctx) => ctx.done(),
            Completion::Dropped => {}
        }
    }

    fn exchange(&self, request: &HttpRequest) -> Result<RawResponse, ClientError> {
        if self.config.debug() {
            tracing::debug!(
                method = request.method.as_str(),
                host = %request.host,
                port = request.port,
                path = %request.path,
                headers = ?request.headers,
                "REQUEST"
            );
        }

        let response = self.transport.send(request)?;

        if self.config.debug() {
            tracing::debug!(status = response.status, headers = ?response.headers, "RESPONSE");
        }
        Ok(response)
    }

    fn fail(&self, err: ClientError, completion: Completion<'_, '_>) {
        if self.config.debug() {
            tracing::debug!(error = %err, "request failed");
        }
        match completion {
            Completion::Callback(callback) => callback.call(Err(err)),
            Completion::Signal(ctx) => {
                ctx.ok(false, &format!("Request failed: {err}"));
                ctx.done();
            }
            Completion::Dropped => {}
        }
    }
}

/// Convenience for callers that want the outcome back instead of a callback.
impl<T: Transport> TestHttpClient<T> {
    pub fn fetch(&self, method: Method, path: &str, options: RequestOptions<'_>) -> Result<ResponseResult, ClientError> {
        let request = build_request(&self.config, method, path, &options.request)?;
        let raw = self.exchange(&request)?;
        Ok(decode_response(raw, self.config.debug()))
    }
}
