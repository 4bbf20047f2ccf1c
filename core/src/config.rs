//! Client-wide defaults.
//!
//! # Design
//! `ClientOptions` is the loose, all-optional input (it deserializes from the
//! same JSON shape test suites tend to keep in fixtures). It is resolved once
//! into a `ClientConfig`, which has no setters and is only ever read by the
//! calls that share it.

use serde::Deserialize;

use crate::error::ClientError;
use crate::headers::Headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

/// Construction options. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Default credentials as `user:pass`.
    pub auth: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Base path prepended verbatim to every call path, e.g. `/api`.
    pub path: Option<String>,
    /// Sent on every request and expected on every response.
    pub headers: Headers,
    /// Expected on every response unless a call overrides it.
    pub status: Option<u16>,
    pub https: bool,
    /// Skip TLS certificate verification on `https` requests.
    pub accept_invalid_certs: bool,
    pub debug: bool,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, ClientError> {
        serde_json::from_str(text).map_err(|e| ClientError::InvalidOptions(e.to_string()))
    }

    pub fn auth(mut self, credentials: impl Into<String>) -> Self {
        self.auth = Some(credentials.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig::from(self)
    }
}

/// Resolved, read-only defaults shared by every call a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: String,
    headers: Headers,
    status: Option<u16>,
    auth: Option<String>,
    accept_invalid_certs: bool,
    debug: bool,
}

impl From<ClientOptions> for ClientConfig {
    fn from(options: ClientOptions) -> Self {
        let scheme = if options.https { Scheme::Https } else { Scheme::Http };
        Self {
            scheme,
            host: options.host.unwrap_or_else(|| "localhost".to_string()),
            port: options.port.unwrap_or_else(|| scheme.default_port()),
            base_path: options.path.unwrap_or_default(),
            headers: options.headers,
            status: options.status,
            auth: options.auth,
            accept_invalid_certs: options.accept_invalid_certs,
            debug: options.debug,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientOptions::default().build()
    }
}

impl ClientConfig {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// `scheme://host:port`, without the base path.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme.as_str(), self.host, self.port)
    }
}
