// SPDX-License-Identifier: PMPL-1.0-or-later

//! Severities and application levels.
//!
//! [`Severity`] is the small fixed set used for filtering. [`Level`] is the
//! richer set callers log at; the enriched variants (`Success`, `Command`,
//! `Database`) carry their own label and color but filter as `Info`.

use crate::error::ConfigError;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Underlying severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ]
    }

    /// Prefix printed when no enriched level is armed.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Warnings and worse go to stderr.
    pub fn is_diagnostic(&self) -> bool {
        *self >= Severity::Warn
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Debug
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ConfigError::UnknownLevel(value.to_string())),
        }
    }
}

/// Level a record is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Success,
    Command,
    Database,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// All levels, in display order.
    pub fn all() -> &'static [Level] {
        &[
            Level::Debug,
            Level::Info,
            Level::Success,
            Level::Command,
            Level::Database,
            Level::Warn,
            Level::Error,
            Level::Fatal,
        ]
    }

    /// Severity used for filtering and stream selection.
    pub fn severity(&self) -> Severity {
        match self {
            Level::Debug => Severity::Debug,
            Level::Info | Level::Success | Level::Command | Level::Database => Severity::Info,
            Level::Warn => Severity::Warn,
            Level::Error => Severity::Error,
            Level::Fatal => Severity::Fatal,
        }
    }

    /// True for levels the plain severity set cannot express.
    pub fn is_enriched(&self) -> bool {
        matches!(self, Level::Success | Level::Command | Level::Database)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Success => "SUCCESS",
            Level::Command => "CMD",
            Level::Database => "DB",
            other => other.severity().label(),
        }
    }

    /// Paint `text` in this level's badge color.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Level::Debug => text.bright_black().bold(),
            Level::Info => text.blue().bold(),
            Level::Success => text.green().bold(),
            Level::Command => text.yellow().bold(),
            Level::Database => text.magenta().bold(),
            Level::Warn => text.yellow().bold(),
            Level::Error | Level::Fatal => text.red().bold(),
        }
    }

    /// Parse the `kind` tag used by tracing events. Only enriched levels
    /// are accepted; plain severities come from the event level itself.
    pub fn from_kind(kind: &str) -> Option<Level> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Level::Success),
            "command" | "cmd" => Some(Level::Command),
            "database" | "db" => Some(Level::Database),
            _ => None,
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error => Level::Error,
            Severity::Fatal => Level::Fatal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
