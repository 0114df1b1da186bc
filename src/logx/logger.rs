//! Structured logger and its builder

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::attr::{quote_if_needed, Attr};
use super::config::LogConfig;
use super::level::{LogFormat, LogLevel};
use super::manager::LogLevelManager;
use crate::error::{Error, Result};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

// ================================
// Logger
// ================================

/// A structured logger writing one line per record.
///
/// Clones share the writer and the [`LogLevelManager`]; each clone carries its
/// own attributes, which both decorate records and select pattern levels.
#[derive(Clone)]
pub struct Logger {
    writer: SharedWriter,
    format: LogFormat,
    manager: LogLevelManager,
    attrs: Arc<[Attr]>,
}

impl Logger {
    /// A logger that drops every record.
    pub fn silent() -> Self {
        Builder::new()
            .with_level(LogLevel::None)
            .writing_to(io::sink())
            .logger()
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn level_manager(&self) -> &LogLevelManager {
        &self.manager
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// A logger with `attrs` appended to this one's.
    pub fn with_attrs<I>(&self, attrs: I) -> Logger
    where
        I: IntoIterator<Item = Attr>,
    {
        let attrs: Vec<Attr> = self.attrs.iter().cloned().chain(attrs).collect();
        Logger {
            writer: Arc::clone(&self.writer),
            format: self.format,
            manager: self.manager.clone(),
            attrs: attrs.into(),
        }
    }

    /// A logger for a nested service.
    pub fn child(&self, service: impl Into<String>) -> Logger {
        self.with_attrs([Attr::service(service)])
    }

    /// Level currently in effect for this logger.
    pub fn level(&self) -> LogLevel {
        self.manager.level_for(&self.attrs)
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
    }

    pub fn is_debug(&self) -> bool {
        self.enabled(LogLevel::Debug)
    }

    pub fn is_info(&self) -> bool {
        self.enabled(LogLevel::Info)
    }

    pub fn is_warn(&self) -> bool {
        self.enabled(LogLevel::Warn)
    }

    pub fn is_error(&self) -> bool {
        self.enabled(LogLevel::Error)
    }

    pub fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg, &[]);
    }

    pub fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg, &[]);
    }

    pub fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg, &[]);
    }

    pub fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg, &[]);
    }

    /// Write a record with extra attributes, if `level` is enabled.
    pub fn log(&self, level: LogLevel, msg: &str, attrs: &[Attr]) {
        if !self.enabled(level) {
            return;
        }
        let line = self.render(level, msg, attrs);
        // a failing sink must not fail the caller
        let _ = writeln!(self.lock_writer(), "{}", line);
    }

    /// Route the `log` facade through this logger.
    pub fn install(self) -> Result<()> {
        log::set_boxed_logger(Box::new(self)).map_err(|_| Error::LoggerAlreadyInstalled)?;
        // levels are decided per record by the manager
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    fn render(&self, level: LogLevel, msg: &str, attrs: &[Attr]) -> String {
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let all_attrs = self.attrs.iter().chain(attrs);
        match self.format {
            LogFormat::Text => {
                let mut line = format!(
                    "time={} level={} msg={}",
                    time,
                    level.label(),
                    quote_if_needed(msg)
                );
                for attr in all_attrs {
                    line.push(' ');
                    line.push_str(&attr.to_string());
                }
                line
            }
            LogFormat::Json => {
                let mut object = Map::new();
                object.insert("time".to_string(), Value::String(time));
                object.insert("level".to_string(), Value::String(level.label().to_string()));
                object.insert("msg".to_string(), Value::String(msg.to_string()));
                for attr in all_attrs {
                    object.insert(attr.key.clone(), attr.value.clone());
                }
                Value::Object(object).to_string()
            }
        }
    }

    fn lock_writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("manager", &self.manager)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let target = [Attr::new("target", record.target())];
        Logger::log(
            self,
            record.level().into(),
            &record.args().to_string(),
            &target,
        );
    }

    fn flush(&self) {
        let _ = self.lock_writer().flush();
    }
}

// ================================
// Builder
// ================================

/// Fluent construction of a [`Logger`].
pub struct Builder {
    level: LogLevel,
    manager: Option<LogLevelManager>,
    writer: Option<Box<dyn Write + Send>>,
    format: LogFormat,
    attrs: Vec<Attr>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Info level, text format, standard output
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            manager: None,
            writer: None,
            format: LogFormat::Text,
            attrs: Vec::new(),
        }
    }

    /// Builder preconfigured from `config`. Fails on an invalid level pattern.
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        let manager = LogLevelManager::new(config.level)
            .with_additional_pattern_keys(config.pattern_keys.iter().cloned());
        manager.set_levels(config.levels.iter().map(|(pattern, level)| (pattern, *level)))?;
        Ok(Self::new()
            .with_level_manager(manager)
            .with_format(config.format))
    }

    /// Global level of the logger's own manager. Ignored when a shared
    /// manager is supplied.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_level_manager(mut self, manager: LogLevelManager) -> Self {
        self.manager = Some(manager);
        self
    }

    pub fn writing_to<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn writing_to_console(self) -> Self {
        self.writing_to(io::stdout())
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_text_format(self) -> Self {
        self.with_format(LogFormat::Text)
    }

    pub fn with_json_format(self) -> Self {
        self.with_format(LogFormat::Json)
    }

    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Attr>,
    {
        self.attrs.extend(attrs);
        self
    }

    pub fn logger(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Write + Send>);
        Logger {
            writer: Arc::new(Mutex::new(writer)),
            format: self.format,
            manager: self
                .manager
                .unwrap_or_else(|| LogLevelManager::new(self.level)),
            attrs: self.attrs.into(),
        }
    }
}

// ================================
// CollectingWriter
// ================================

/// In-memory writer for inspecting log output in tests. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CollectingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written lines, without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for CollectingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
