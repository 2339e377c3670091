// SPDX-License-Identifier: PMPL-1.0-or-later

//! The logger service.
//!
//! Built once at startup and handed to every consumer. Clones share the
//! same formatter, threshold and sinks.

use super::bridge::SeverityBridge;
use super::formatter::LogFormatter;
use super::level::{Level, Severity};
use super::sink::{ConsoleSink, FileSink, LogSink};
use crate::config::LogConfig;
use crate::error::ConfigError;
use chrono_tz::Tz;
use colored::Colorize;
use std::fmt;
use std::sync::Arc;

struct Inner {
    name: String,
    formatter: LogFormatter,
    min_severity: Severity,
    sinks: Vec<Box<dyn LogSink>>,
}

#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("time_zone", &self.inner.formatter.time_zone())
            .field("min_severity", &self.inner.min_severity)
            .field("sinks", &self.inner.sinks.len())
            .finish()
    }
}

impl Logger {
    pub fn builder(name: &str) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Console logger, plus a file sink when `save_to_file` is set.
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        let mut builder = Logger::builder(&config.name)
            .time_zone(config.time_zone)
            .min_severity(config.min_severity)
            .sink(ConsoleSink::new(config.console));
        if config.save_to_file {
            builder = builder.sink(FileSink::open(&config.file_path)?);
        }
        Ok(builder.build())
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn min_severity(&self) -> Severity {
        self.inner.min_severity
    }

    pub fn formatter(&self) -> &LogFormatter {
        &self.inner.formatter
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.inner.min_severity
    }

    /// Log `message` at `level`. Enriched levels arm a per-call bridge and
    /// then go out at their underlying severity.
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        let mut bridge = SeverityBridge::new();
        if level.is_enriched() {
            bridge.arm(level);
        }
        self.emit(level.severity(), &mut bridge, message.as_ref());
    }

    /// Consume `bridge` for a record at `severity` and write it out.
    pub(crate) fn emit(&self, severity: Severity, bridge: &mut SeverityBridge, message: &str) {
        let badge = bridge.consume(severity);
        if !self.enabled(severity) {
            return;
        }
        let rendered = self.inner.formatter.format(&badge, message);
        for sink in &self.inner.sinks {
            sink.write(severity, &rendered);
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(Level::Success, message);
    }

    pub fn command(&self, message: impl AsRef<str>) {
        self.log(Level::Command, message);
    }

    pub fn database(&self, message: impl AsRef<str>) {
        self.log(Level::Database, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message);
    }

    /// Audit line for an executed command, one detail per line.
    pub fn command_invocation(&self, invocation: &CommandLog) {
        self.command(invocation.to_string());
    }
}

pub struct LoggerBuilder {
    name: String,
    time_zone: Tz,
    min_severity: Severity,
    sinks: Vec<Box<dyn LogSink>>,
}

impl LoggerBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            time_zone: Tz::UTC,
            min_severity: Severity::Debug,
            sinks: Vec::new(),
        }
    }

    pub fn time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Without explicit sinks the logger writes to the console.
    pub fn build(mut self) -> Logger {
        if self.sinks.is_empty() {
            self.sinks.push(Box::new(ConsoleSink::default()));
        }
        Logger {
            inner: Arc::new(Inner {
                name: self.name,
                formatter: LogFormatter::new(self.time_zone),
                min_severity: self.min_severity,
                sinks: self.sinks,
            }),
        }
    }
}

/// Who ran which command, and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLog {
    pub command_name: String,
    pub username: Option<String>,
    pub user_id: Option<String>,
    pub guild_name: Option<String>,
    pub guild_id: Option<String>,
    pub shard_id: Option<u32>,
    pub cluster_id: Option<u32>,
}

impl CommandLog {
    pub fn new(command_name: &str) -> Self {
        Self {
            command_name: command_name.to_string(),
            ..Self::default()
        }
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

impl fmt::Display for CommandLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})\n{}: {}",
            "👤 User".bright_black(),
            or_unknown(&self.username).yellow(),
            or_unknown(&self.user_id).yellow(),
            "🔧 Command".bright_black(),
            format!("/{}", self.command_name.trim_start_matches('/')).yellow(),
        )?;
        if self.guild_name.is_some() || self.guild_id.is_some() {
            write!(
                f,
                "\n{}: {} ({})",
                "🏠 Guild".bright_black(),
                or_unknown(&self.guild_name).yellow(),
                or_unknown(&self.guild_id).yellow(),
            )?;
        }
        if let Some(shard) = self.shard_id {
            let cluster = self
                .cluster_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            write!(
                f,
                "\n{}: {} ({})",
                "♦️  Shard".bright_black(),
                shard.to_string().yellow(),
                cluster.yellow(),
            )?;
        }
        Ok(())
    }
}
