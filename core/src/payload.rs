//! Request payloads and their two encodings.
//!
//! # Design
//! A payload is either raw text sent as-is or a structured JSON value. The
//! variant alone decides the encoding: `Json` bodies are serialized and
//! force `content-type: application/json`, `Raw` bodies are written
//! untouched. On query-only methods the same payload becomes a querystring.

use serde_json::Value;

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Pre-encoded text: written verbatim as a body, or appended verbatim
    /// after `?` as a querystring.
    Raw(String),
    /// Structured data: JSON-encoded as a body, URL-encoded as a
    /// querystring.
    Json(Value),
}

/// A body ready for the wire, plus whether it must be labelled as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodedBody {
    pub text: String,
    pub is_json: bool,
}

impl Payload {
    pub(crate) fn encode_body(&self) -> Result<EncodedBody, ClientError> {
        match self {
            Payload::Raw(text) => Ok(EncodedBody {
                text: text.clone(),
                is_json: false,
            }),
            Payload::Json(value) => Ok(EncodedBody {
                text: serde_json::to_string(value)?,
                is_json: true,
            }),
        }
    }

    /// Render as a querystring without the leading `?`.
    ///
    /// Top-level object keys keep their insertion order. Arrays repeat the
    /// key once per element; `null` and nested objects encode as empty
    /// values. A structured payload that is not an object yields nothing.
    pub fn to_query_string(&self) -> String {
        match self {
            Payload::Raw(text) => text.clone(),
            Payload::Json(Value::Object(map)) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let key = urlencoding::encode(key);
                    match value {
                        Value::Array(items) => {
                            for item in items {
                                pairs.push(format!("{key}={}", urlencoding::encode(&scalar_text(item))));
                            }
                        }
                        other => pairs.push(format!("{key}={}", urlencoding::encode(&scalar_text(other)))),
                    }
                }
                pairs.join("&")
            }
            Payload::Json(_) => String::new(),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Raw(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Raw(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_string_keeps_insertion_order() {
        let payload = Payload::Json(json!({"zeta": "last", "alpha": "first", "mid": 2}));
        assert_eq!(payload.to_query_string(), "zeta=last&alpha=first&mid=2");
    }

    #[test]
    fn query_string_percent_encodes_keys_and_values() {
        let payload = Payload::Json(json!({"full name": "Charlie Brown", "q": "a&b=c"}));
        assert_eq!(
            payload.to_query_string(),
            "full%20name=Charlie%20Brown&q=a%26b%3Dc"
        );
    }

    #[test]
    fn query_string_repeats_array_keys_and_blanks_non_scalars() {
        let payload = Payload::Json(json!({"tag": ["a", "b"], "none": null, "nested": {"x": 1}, "ok": true}));
        assert_eq!(payload.to_query_string(), "tag=a&tag=b&none=&nested=&ok=true");
    }

    #[test]
    fn raw_query_is_verbatim() {
        let payload = Payload::from("already=encoded%20text");
        assert_eq!(payload.to_query_string(), "already=encoded%20text");
    }

    #[test]
    fn non_object_json_query_is_empty() {
        assert_eq!(Payload::Json(json!([1, 2])).to_query_string(), "");
    }

    #[test]
    fn json_body_is_flagged() {
        let encoded = Payload::Json(json!({"name": "Charlie"})).encode_body().unwrap();
        assert_eq!(encoded.text, r#"{"name":"Charlie"}"#);
        assert!(encoded.is_json);
    }

    #[test]
    fn raw_body_is_untouched() {
        let encoded = Payload::from("test").encode_body().unwrap();
        assert_eq!(encoded.text, "test");
        assert!(!encoded.is_json);
    }
}
