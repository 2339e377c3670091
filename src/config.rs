// SPDX-License-Identifier: PMPL-1.0-or-later

//! Environment-derived configuration.
//!
//! Values are resolved once at startup. Unparseable values fall back to
//! their defaults and are kept in [`Config::issues`] so the host (or the
//! `check` command) can report them.

use crate::error::ConfigError;
use crate::log::{ConsoleStream, Severity};
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

/// Language consulted when the requested one lacks a translation.
pub const FALLBACK_LANGUAGE: &str = "en";

pub const TIME_ZONE_ENV: &str = "TIME_ZONE";
pub const LOCALES_DIR_ENV: &str = "LOCALES_DIR";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_SAVE_ENV: &str = "LOG_SAVE_TO_FILE";
pub const LOG_FILE_ENV: &str = "LOG_FILE";
pub const LOG_NAME_ENV: &str = "LOG_NAME";

const DEFAULT_NAME: &str = "lingolog";
const DEFAULT_LOCALES_DIR: &str = "locales";

/// Logger settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub name: String,
    pub time_zone: Tz,
    pub min_severity: Severity,
    /// Pass-through flag: when set, records are also appended to `file_path`.
    pub save_to_file: bool,
    pub file_path: PathBuf,
    /// Console routing. Commands that print data use [`ConsoleStream::Stderr`].
    pub console: ConsoleStream,
}

impl LogConfig {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            time_zone: Tz::UTC,
            min_severity: Severity::Debug,
            save_to_file: false,
            file_path: default_log_file(name),
            console: ConsoleStream::Split,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::named(DEFAULT_NAME)
    }
}

/// Translation bundle settings.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub root: PathBuf,
    /// Regional code → bundle language.
    pub aliases: Vec<(String, String)>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_LOCALES_DIR),
            aliases: vec![
                ("en-GB".to_string(), FALLBACK_LANGUAGE.to_string()),
                ("en-US".to_string(), FALLBACK_LANGUAGE.to_string()),
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct Config {
    pub log: LogConfig,
    pub locale: LocaleConfig,
    pub issues: Vec<ConfigError>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut issues = Vec::new();

        let name = get(LOG_NAME_ENV).unwrap_or_else(|| DEFAULT_NAME.to_string());

        let time_zone = match get(TIME_ZONE_ENV) {
            Some(raw) => raw.trim().parse::<Tz>().unwrap_or_else(|_| {
                issues.push(ConfigError::UnknownTimeZone(raw.clone()));
                Tz::UTC
            }),
            None => Tz::UTC,
        };

        let min_severity = match get(LOG_LEVEL_ENV) {
            Some(raw) => raw.parse::<Severity>().unwrap_or_else(|err| {
                issues.push(err);
                Severity::Debug
            }),
            None => Severity::Debug,
        };

        let save_to_file = get(LOG_SAVE_ENV).map(|raw| parse_flag(&raw)).unwrap_or(false);
        let file_path = get(LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_log_file(&name));

        let mut locale = LocaleConfig::default();
        if let Some(root) = get(LOCALES_DIR_ENV) {
            locale.root = PathBuf::from(root);
        }

        Self {
            log: LogConfig {
                name,
                time_zone,
                min_severity,
                save_to_file,
                file_path,
                console: ConsoleStream::Split,
            },
            locale,
            issues,
        }
    }
}

fn default_log_file(name: &str) -> PathBuf {
    PathBuf::from("logs").join(format!("{}.log", name))
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
