// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types shared by the locale store and the logger.
//!
//! Nothing here is fatal to the host: locale errors are logged and skipped,
//! and configuration errors fall back to defaults except where a sink
//! cannot be opened at all.

use std::path::PathBuf;
use thiserror::Error;

/// Failures encountered while loading or querying translation bundles.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The locale root itself could not be listed.
    #[error("failed to read language directory {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single bundle file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single bundle file was read but is not a valid document.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A translation key without exactly one `.` between two segments.
    #[error("invalid translation key format: {0}. Expected format: \"category.key\"")]
    InvalidKey(String),
}

/// Problems resolving logger or locale configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown log level '{0}' (expected debug, info, warn, error or fatal)")]
    UnknownLevel(String),

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
