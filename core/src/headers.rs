//! Insertion-ordered, case-insensitive header mapping.
//!
//! # Design
//! Stored as a plain `Vec<(String, String)>` so the order headers were
//! declared in is the order they are sent and logged. Lookups and
//! replacements compare names ASCII-case-insensitively; the spelling of the
//! first insertion is kept.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert `name`, replacing the value in place if the name is already
    /// present under any casing.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.0[idx].1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Append a value, joining it onto an existing entry with `", "`.
    ///
    /// Used when collecting response headers that repeat.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => {
                let existing = &mut self.0[idx].1;
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.0[idx].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// A copy of `self` overridden key-by-key by `overrides`.
    pub fn merged_with(&self, overrides: &Headers) -> Headers {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.set(name, value);
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.set(k, v);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// Option files spell headers as a JSON object; non-string values keep their
// JSON text so `{"x-retries": 3}` still means "3".
impl From<serde_json::Map<String, serde_json::Value>> for Headers {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_case_insensitively_and_keeps_position() {
        let mut headers = Headers::from([("Color", "blue"), ("size", "L")]);
        headers.set("color", "red");
        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(pairs, vec![("Color", "red"), ("size", "L")]);
    }

    #[test]
    fn merged_with_prefers_overrides() {
        let defaults = Headers::from([("color", "blue"), ("accept", "*/*")]);
        let overrides = Headers::from([("color", "red")]);
        let merged = defaults.merged_with(&overrides);
        assert_eq!(merged.get("color"), Some("red"));
        assert_eq!(merged.get("accept"), Some("*/*"));
        assert_eq!(merged.len(), 2);
        // The defaults themselves are untouched.
        assert_eq!(defaults.get("color"), Some("blue"));
    }

    #[test]
    fn append_joins_repeated_names() {
        let mut headers = Headers::new();
        headers.append("set-cookie", "a=1");
        headers.append("Set-Cookie", "b=2");
        assert_eq!(headers.get("SET-COOKIE"), Some("a=1, b=2"));
    }

    #[test]
    fn deserializes_from_json_object_in_order() {
        let headers: Headers =
            serde_json::from_str(r#"{"x-b":"2","x-a":"1","x-retries":3}"#).unwrap();
        let names: Vec<_> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["x-b", "x-a", "x-retries"]);
        assert_eq!(headers.get("x-retries"), Some("3"));
    }
}
