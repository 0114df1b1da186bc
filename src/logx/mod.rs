//! Structured logging with runtime-adjustable, pattern-scoped levels
//!
//! Independent of the sequence engines. A [`Logger`] renders text or JSON
//! lines, takes its levels from a shared [`LogLevelManager`], and can back the
//! `log` facade through [`Logger::install`].

pub mod attr;
pub mod config;
pub mod level;
pub mod logger;
pub mod manager;

pub use attr::{Attr, COMPONENT_KEY, ERROR_KEY, SERVICE_KEY};
pub use config::LogConfig;
pub use level::{LogFormat, LogLevel};
pub use logger::{Builder, CollectingWriter, Logger};
pub use manager::LogLevelManager;
