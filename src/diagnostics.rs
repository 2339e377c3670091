// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup self-check: configuration and locale coverage.

use crate::config::{Config, FALLBACK_LANGUAGE};
use crate::i18n::Translator;
use colored::Colorize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl Status {
    fn tag(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: String,
    pub status: Status,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, status: Status, detail: String) -> Self {
        Self {
            label: label.into(),
            status,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Status::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Status::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Status::Error, detail)
    }

    pub fn print(&self) {
        let tag = match self.status {
            Status::Ok => self.status.tag().green(),
            Status::Warn => self.status.tag().yellow(),
            Status::Error => self.status.tag().red(),
        };
        println!("  [{}] {:22} {}", tag, self.label, self.detail);
    }
}

/// Run every check against an already loaded translator.
pub fn run(config: &Config, translator: &Translator) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("lingolog {}", env!("CARGO_PKG_VERSION")),
    )];

    if config.issues.is_empty() {
        checks.push(Diagnostic::ok(
            "configuration",
            format!(
                "time zone {}, level {}, file logging {}",
                config.log.time_zone,
                config.log.min_severity,
                if config.log.save_to_file { "on" } else { "off" }
            ),
        ));
    } else {
        for issue in &config.issues {
            checks.push(Diagnostic::warning(
                "configuration",
                format!("{} (default used)", issue),
            ));
        }
    }

    checks.push(check_root(&config.locale.root));
    checks.extend(check_coverage(translator));
    checks
}

fn check_root(root: &Path) -> Diagnostic {
    if root.is_dir() {
        Diagnostic::ok("locale root", format!("{} exists", root.display()))
    } else if root.exists() {
        Diagnostic::error(
            "locale root",
            format!("{} exists but is not a directory", root.display()),
        )
    } else {
        Diagnostic::error("locale root", format!("{} missing", root.display()))
    }
}

fn check_coverage(translator: &Translator) -> Vec<Diagnostic> {
    let store = translator.store();
    let languages = store.available_languages();
    let mut checks = Vec::new();

    if !store.has_language(FALLBACK_LANGUAGE) {
        checks.push(Diagnostic::error(
            "fallback language",
            format!("'{}' not loaded; missing keys resolve to themselves", FALLBACK_LANGUAGE),
        ));
        return checks;
    }
    checks.push(Diagnostic::ok(
        "fallback language",
        format!(
            "'{}' loaded ({} templates)",
            FALLBACK_LANGUAGE,
            store.bundle().template_count(FALLBACK_LANGUAGE)
        ),
    ));

    for lang in languages.iter().filter(|lang| *lang != FALLBACK_LANGUAGE) {
        let missing = store.bundle().missing_keys(lang, FALLBACK_LANGUAGE);
        let label = format!("language {}", lang);
        if missing.is_empty() {
            checks.push(Diagnostic::ok(label, "complete".to_string()));
        } else {
            checks.push(Diagnostic::warning(
                label,
                format!(
                    "{} keys fall back to {}: {}",
                    missing.len(),
                    FALLBACK_LANGUAGE,
                    missing.join(", ")
                ),
            ));
        }
    }
    checks
}
