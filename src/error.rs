//! Error types and handling for seqkit
//!
//! Recoverable failures (conversions, absent values requested through a
//! `Result`, log configuration parsing) are reported through [`Error`].
//! Precondition violations such as `must_get` on an empty `Optional` panic instead.

use thiserror::Error;

/// Main error type for seqkit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An `Optional` was asked for its value but holds none
    #[error("value is not present")]
    ValueNotPresent,

    /// A numeric conversion would overflow or underflow the target type
    #[error("value {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// A string could not be parsed into the requested type
    #[error("invalid syntax: cannot parse {input:?} as {target}")]
    InvalidSyntax { input: String, target: &'static str },

    /// A value is not one of the allowed enum values
    #[error("invalid enum value {value:?}, expected one of [{allowed}]")]
    InvalidEnumValue { value: String, allowed: String },

    #[error("unknown log level: {0:?}")]
    UnknownLogLevel(String),

    #[error("unknown log format: {0:?}")]
    UnknownLogFormat(String),

    /// A level pattern is empty or contains an empty segment
    #[error("invalid level pattern: {0:?}")]
    InvalidPattern(String),

    #[error("a global logger is already installed")]
    LoggerAlreadyInstalled,
}

impl Error {
    pub(crate) fn out_of_range(value: impl ToString, target: &'static str) -> Self {
        Error::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    pub(crate) fn invalid_syntax(input: &str, target: &'static str) -> Self {
        Error::InvalidSyntax {
            input: input.to_string(),
            target,
        }
    }
}

/// Result type for seqkit operations
pub type Result<T> = std::result::Result<T, Error>;
