//! The seam between request values and the network.
//!
//! # Design
//! The client only ever sees `HttpRequest` going out and `RawResponse`
//! coming back; how the bytes move is a `Transport`'s business. Unit tests
//! plug in canned transports, the default build ships a blocking `ureq`
//! one. A transport makes exactly one attempt per request: no retries and
//! no timeouts.

use crate::error::ClientError;
use crate::http::{HttpRequest, RawResponse};

pub trait Transport {
    /// Execute `request` and buffer the whole response.
    ///
    /// Any status code is a response, not an error.
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, ClientError> {
        (**self).send(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use ureq::tls::TlsConfig;
    use ureq::Agent;

    use super::Transport;
    use crate::error::ClientError;
    use crate::headers::Headers;
    use crate::http::{HttpRequest, RawResponse};

    /// Blocking transport over `ureq`.
    ///
    /// Holds two agents: one that verifies certificates and one that does
    /// not. The second is only used for requests built from a config that
    /// opted into `accept_invalid_certs`.
    pub struct UreqTransport {
        verified: Agent,
        unverified: Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self {
                verified: agent(false),
                unverified: agent(true),
            }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn agent(disable_verification: bool) -> Agent {
        let tls = TlsConfig::builder()
            .disable_verification(disable_verification)
            .build();
        Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(tls)
            .build()
            .new_agent()
    }

    impl Transport for UreqTransport {
        fn send(&self, request: &HttpRequest) -> Result<RawResponse, ClientError> {
            let agent = if request.accept_invalid_certs {
                &self.unverified
            } else {
                &self.verified
            };

            let mut builder = ureq::http::Request::builder()
                .method(request.method.as_str())
                .uri(request.url());
            for (name, value) in request.headers.iter() {
                builder = builder.header(name, value);
            }
            if !request.headers.contains("authorization") {
                if let Some(authorization) = request.authorization() {
                    builder = builder.header("authorization", authorization);
                }
            }

            let sent = match &request.body {
                Some(body) => {
                    let req = builder
                        .body(body.clone().into_bytes())
                        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    agent.run(req)
                }
                None => {
                    let req = builder
                        .body(())
                        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    agent.run(req)
                }
            };
            let response = sent.map_err(|e| ClientError::Connection(e.to_string()))?;

            let (parts, mut body) = response.into_parts();
            let mut headers = Headers::new();
            for (name, value) in parts.headers.iter() {
                headers.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
            }
            let bytes = body
                .read_to_vec()
                .map_err(|e| ClientError::Body(e.to_string()))?;

            Ok(RawResponse {
                status: parts.status.as_u16(),
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scheme;
    use crate::headers::Headers;
    use crate::http::Method;

    struct Fixed(u16);

    impl Transport for Fixed {
        fn send(&self, _request: &HttpRequest) -> Result<RawResponse, ClientError> {
            Ok(RawResponse {
                status: self.0,
                headers: Headers::new(),
                body: String::new(),
            })
        }
    }

    fn status_via<T: Transport>(transport: T, request: &HttpRequest) -> u16 {
        transport.send(request).unwrap().status
    }

    #[test]
    fn borrowed_transport_delegates() {
        let fixed = Fixed(418);
        let request = HttpRequest {
            method: Method::Get,
            scheme: Scheme::Http,
            host: "localhost".to_string(),
            port: 80,
            path: "/".to_string(),
            headers: Headers::new(),
            body: None,
            auth: None,
            accept_invalid_certs: false,
        };
        assert_eq!(status_via(&fixed, &request), 418);
        let dynamic: &dyn Transport = &fixed;
        assert_eq!(status_via(dynamic, &request), 418);
    }
}
