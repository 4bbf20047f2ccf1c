//! Turns client defaults plus per-call overrides into an `HttpRequest`.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpRequest, Method};
use crate::options::RequestSpec;

/// Build the request for one call.
///
/// The call path is appended to the base path as-is; slashes are the
/// caller's business. Query-only verbs append `data` as a querystring.
/// POST and PUT send `data` (or `body` when `data` is absent) and get a
/// `content-length`; structured payloads also force
/// `content-type: application/json`.
pub fn build_request(
    config: &ClientConfig,
    method: Method,
    path: &str,
    spec: &RequestSpec,
) -> Result<HttpRequest, ClientError> {
    let mut full_path = format!("{}{}", config.base_path(), path);
    let mut headers = config.headers().merged_with(&spec.headers);
    let mut body = None;

    if method.sends_body() {
        if let Some(payload) = spec.data.as_ref().or(spec.body.as_ref()) {
            let encoded = payload.encode_body()?;
            if encoded.is_json {
                headers.set("content-type", "application/json");
            }
            headers.set("content-length", encoded.text.len().to_string());
            body = Some(encoded.text);
        }
    } else if let Some(data) = &spec.data {
        full_path.push('?');
        full_path.push_str(&data.to_query_string());
    }

    Ok(HttpRequest {
        method,
        scheme: config.scheme(),
        host: config.host().to_string(),
        port: config.port(),
        path: full_path,
        headers,
        body,
        auth: spec.auth.clone().or_else(|| config.auth().map(str::to_string)),
        accept_invalid_certs: config.accept_invalid_certs(),
    })
}
