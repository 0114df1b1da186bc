//! Key/value attributes attached to loggers and records

use std::fmt;

use serde_json::Value;

pub const SERVICE_KEY: &str = "service";
pub const COMPONENT_KEY: &str = "component";
pub const ERROR_KEY: &str = "error";

/// A single structured attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `service=<name>`, one segment of a logger's level-pattern path.
    pub fn service(name: impl Into<String>) -> Self {
        Self::new(SERVICE_KEY, name.into())
    }

    /// `component=<name>`, matched after all services.
    pub fn component(name: impl Into<String>) -> Self {
        Self::new(COMPONENT_KEY, name.into())
    }

    /// `error=<message>`.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new(ERROR_KEY, err.to_string())
    }

    /// An attribute whose value may be missing; absent values render as `<nil>`.
    pub fn optional<V: Into<Value>>(key: impl Into<String>, value: Option<V>) -> Self {
        Self::new(key, value.map_or(Value::Null, Into::into))
    }

    /// The value as plain text, without JSON quoting.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => "<nil>".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, quote_if_needed(&self.value_text()))
    }
}

/// Quote text-format values that would otherwise be ambiguous.
pub(crate) fn quote_if_needed(text: &str) -> String {
    let needs_quotes = text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '"' || c.is_control());
    if needs_quotes {
        format!("{:?}", text)
    } else {
        text.to_string()
    }
}
