//! Shared, runtime-adjustable log levels
//!
//! A [`LogLevelManager`] holds one global level plus levels for dot-separated
//! patterns such as `Billing.Invoices`. Every logger built from the same manager
//! reads it on each record, so changes apply immediately.
//!
//! A logger's path is the values of its `service` attributes, then of its
//! `component` attributes, then of any additional pattern keys, each group in
//! attribute order. A pattern matches when its segments occur contiguously in
//! that path; the longest matching pattern decides the level.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::attr::{Attr, COMPONENT_KEY, SERVICE_KEY};
use super::level::LogLevel;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct LevelRule {
    segments: Vec<String>,
    level: LogLevel,
}

#[derive(Debug, Default)]
struct Levels {
    global: LogLevel,
    rules: Vec<LevelRule>,
    pattern_keys: Vec<String>,
}

/// Thread-safe level cell shared between loggers. Cloning shares the state.
#[derive(Debug, Clone, Default)]
pub struct LogLevelManager {
    levels: Arc<RwLock<Levels>>,
}

impl LogLevelManager {
    /// Create a manager with the given global level
    pub fn new(level: LogLevel) -> Self {
        Self {
            levels: Arc::new(RwLock::new(Levels {
                global: level,
                ..Levels::default()
            })),
        }
    }

    /// Let values of `keys` take part in pattern paths, after services and components.
    pub fn with_additional_pattern_keys<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.write().pattern_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// The global level.
    pub fn level(&self) -> LogLevel {
        self.read().global
    }

    pub fn set_level(&self, level: LogLevel) {
        self.write().global = level;
    }

    /// Set the level for loggers whose path contains `pattern`. Setting the same
    /// pattern again replaces its level.
    pub fn set_level_for_pattern(&self, pattern: &str, level: LogLevel) -> Result<()> {
        let segments = parse_pattern(pattern)?;
        let mut levels = self.write();
        match levels.rules.iter_mut().find(|rule| rule.segments == segments) {
            Some(rule) => rule.level = level,
            None => levels.rules.push(LevelRule { segments, level }),
        }
        Ok(())
    }

    /// Set many pattern levels at once. Stops at the first invalid pattern;
    /// patterns before it stay applied.
    pub fn set_levels<I, P>(&self, levels: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, LogLevel)>,
        P: AsRef<str>,
    {
        for (pattern, level) in levels {
            self.set_level_for_pattern(pattern.as_ref(), level)?;
        }
        Ok(())
    }

    /// Level in effect for a logger carrying `attrs`.
    pub fn level_for(&self, attrs: &[Attr]) -> LogLevel {
        let levels = self.read();
        if levels.rules.is_empty() {
            return levels.global;
        }
        let path = pattern_path(attrs, &levels.pattern_keys);
        levels
            .rules
            .iter()
            .filter(|rule| contains_run(&path, &rule.segments))
            .max_by_key(|rule| rule.segments.len())
            .map_or(levels.global, |rule| rule.level)
    }

    /// Whether a record at `level` passes for a logger carrying `attrs`.
    pub fn enabled(&self, level: LogLevel, attrs: &[Attr]) -> bool {
        self.level_for(attrs).allows(level)
    }

    // a panicking writer cannot leave Levels half-updated, so poisoning is ignored
    fn read(&self) -> RwLockReadGuard<'_, Levels> {
        self.levels.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Levels> {
        self.levels.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn parse_pattern(pattern: &str) -> Result<Vec<String>> {
    let segments: Vec<String> = pattern.split('.').map(str::to_string).collect();
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(Error::InvalidPattern(pattern.to_string()));
    }
    Ok(segments)
}

fn pattern_path(attrs: &[Attr], extra_keys: &[String]) -> Vec<String> {
    let mut path: Vec<String> = values_of(attrs, SERVICE_KEY)
        .chain(values_of(attrs, COMPONENT_KEY))
        .collect();
    for key in extra_keys {
        path.extend(values_of(attrs, key));
    }
    path
}

fn values_of<'a>(attrs: &'a [Attr], key: &'a str) -> impl Iterator<Item = String> + 'a {
    attrs
        .iter()
        .filter(move |attr| attr.key == key)
        .map(Attr::value_text)
}

fn contains_run(path: &[String], segments: &[String]) -> bool {
    path.windows(segments.len()).any(|window| window == segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_contains_run_requires_adjacent_segments() {
        let p = path(&["A", "B", "C"]);
        assert!(contains_run(&p, &path(&["B", "C"])));
        assert!(contains_run(&p, &path(&["A"])));
        assert!(!contains_run(&p, &path(&["A", "C"])));
        assert!(!contains_run(&p, &path(&["A", "B", "C", "D"])));
    }

    #[test]
    fn test_parse_pattern_rejects_empty_segments() {
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("A..B").is_err());
        assert!(parse_pattern(".A").is_err());
        assert_eq!(parse_pattern("A.B").unwrap(), path(&["A", "B"]));
    }

    #[test]
    fn test_pattern_path_orders_services_before_components() {
        let attrs = vec![
            Attr::component("Repo"),
            Attr::service("Billing"),
            Attr::new("foo", "Bar"),
            Attr::service("Invoices"),
        ];
        assert_eq!(
            pattern_path(&attrs, &["foo".to_string()]),
            path(&["Billing", "Invoices", "Repo", "Bar"])
        );
        assert_eq!(pattern_path(&attrs, &[]), path(&["Billing", "Invoices", "Repo"]));
    }
}
