//! The assertion context and the battery of response checks.
//!
//! # Design
//! The client never decides what a failed check means. It reports every
//! comparison to an `AssertionContext`; `AssertionReport` records them for
//! later inspection, `PanicOnFailure` fails the test on the spot.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::http::ResponseResult;
use crate::options::ExpectedResponse;

/// Receives the checks a call performs and its completion signal.
pub trait AssertionContext {
    /// Record a check that passed when `value` is true.
    fn ok(&mut self, value: bool, message: &str);

    /// Compare two scalar values (status codes, header values, body text).
    fn equal(&mut self, actual: &Value, expected: &Value, message: &str);

    /// Compare two decoded structures.
    fn deep_equal(&mut self, actual: &Value, expected: &Value, message: &str) {
        self.equal(actual, expected, message);
    }

    /// The call is finished and no completion callback was given.
    fn done(&mut self);
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub message: String,
    pub actual: Option<Value>,
    pub expected: Option<Value>,
}

/// Records every check instead of failing immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssertionReport {
    checks: usize,
    failures: Vec<Failure>,
    done: bool,
}

impl AssertionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of checks reported, passed or failed.
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn compare(&mut self, actual: &Value, expected: &Value, message: &str) {
        self.checks += 1;
        if actual != expected {
            self.failures.push(Failure {
                message: message.to_string(),
                actual: Some(actual.clone()),
                expected: Some(expected.clone()),
            });
        }
    }
}

impl AssertionContext for AssertionReport {
    fn ok(&mut self, value: bool, message: &str) {
        self.checks += 1;
        if !value {
            self.failures.push(Failure {
                message: message.to_string(),
                actual: None,
                expected: None,
            });
        }
    }

    fn equal(&mut self, actual: &Value, expected: &Value, message: &str) {
        self.compare(actual, expected, message);
    }

    fn done(&mut self) {
        self.done = true;
    }
}

/// Panics with a diff on the first failed check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicOnFailure;

impl AssertionContext for PanicOnFailure {
    fn ok(&mut self, value: bool, message: &str) {
        assert!(value, "{message}");
    }

    fn equal(&mut self, actual: &Value, expected: &Value, message: &str) {
        pretty_assertions::assert_eq!(actual, expected, "{}", message);
    }

    fn done(&mut self) {}
}

/// Run every check the expectation (or the client defaults) asks for.
///
/// Status falls back to the client's default status. Headers are the
/// client's default headers overridden by the expected ones; only those
/// keys are compared and extra response headers are ignored. Body and data
/// are checked only when expected.
pub fn run_assertions(
    ctx: &mut dyn AssertionContext,
    expect: &ExpectedResponse,
    config: &ClientConfig,
    result: &ResponseResult,
) {
    if let Some(status) = expect.status.or(config.status()) {
        ctx.equal(&Value::from(result.status), &Value::from(status), "Status code mismatch");
    }

    let headers = config.headers().merged_with(&expect.headers);
    for (name, expected) in headers.iter() {
        let actual = result.header(name).map_or(Value::Null, Value::from);
        ctx.equal(&actual, &Value::from(expected), &format!("Header mismatch: {name}"));
    }

    if let Some(body) = &expect.body {
        ctx.equal(&Value::from(result.body.as_str()), &Value::from(body.as_str()), "Body mismatch");
    }

    if let Some(data) = &expect.data {
        let actual = result.data.clone().unwrap_or(Value::Null);
        ctx.deep_equal(&actual, data, "Data mismatch");
    }
}
