//! JSON decoding of response bodies.
//!
//! # Design
//! Decoding never fails a call. A body labelled `application/json` is parsed
//! strictly first; if that fails, parsing is retried once from the first
//! `{`, which recovers bodies that some servers prefix with markup or
//! warnings. The retry is a heuristic: leading text that itself contains a
//! `{` sends it to the wrong offset, and then `data` is simply absent.

use serde_json::Value;

use crate::http::{RawResponse, ResponseResult};

pub fn decode_response(raw: RawResponse, debug: bool) -> ResponseResult {
    let data = if is_json(&raw) && !raw.body.is_empty() {
        parse_body(&raw.body, debug)
    } else {
        None
    };

    ResponseResult {
        status: raw.status,
        headers: raw.headers,
        body: raw.body,
        data,
    }
}

fn is_json(raw: &RawResponse) -> bool {
    raw.headers
        .get("content-type")
        .is_some_and(|value| value.contains("application/json"))
}

fn parse_body(body: &str, debug: bool) -> Option<Value> {
    let err = match serde_json::from_str::<Value>(body) {
        Ok(value) => return Some(value),
        Err(err) => err,
    };
    if debug {
        tracing::debug!(error = %err, body, "RESPONSE.BODY is not valid JSON");
    }

    let offset = body.find('{')?;
    let filtered = &body[offset..];
    match serde_json::from_str::<Value>(filtered) {
        Ok(value) => {
            if debug {
                tracing::debug!(offset, "JSON recovered on second parse attempt");
            }
            Some(value)
        }
        Err(err) => {
            if debug {
                tracing::debug!(error = %err, body = filtered, "FILTERED RESPONSE.BODY is not valid JSON");
            }
            None
        }
    }
}
