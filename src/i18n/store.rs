// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation bundles loaded from disk.
//!
//! ## Layout
//!
//! ```text
//! locales/
//!   en/              nested: one document per category
//!     ping.json      { "reply": "Pong!" }
//!     commands.yaml  { name: "ping" }
//!   cs.json          flat: { "ping": { "reply": "Pong!" }, "help.title": "Nápověda" }
//! ```
//!
//! Nested directories are the canonical shape. A flat file is migrated into
//! it while loading: object values become categories, and string values
//! whose key is itself `category.key` are split on the delimiter.
//!
//! A file that cannot be read or parsed is skipped with a warning; loading
//! never aborts because of one bad file.

use crate::config::FALLBACK_LANGUAGE;
use crate::error::LocaleError;
use crate::log::Logger;
use colored::Colorize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Split `category.key` into its two non-empty halves.
pub(crate) fn split_key(key: &str) -> Option<(&str, &str)> {
    let (category, short) = key.split_once('.')?;
    if category.is_empty() || short.is_empty() || short.contains('.') {
        return None;
    }
    Some((category, short))
}

/// language → category → key → template.
#[derive(Debug, Default, Clone)]
pub struct LocaleBundle {
    languages: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl LocaleBundle {
    pub fn insert(&mut self, lang: &str, category: &str, key: &str, template: &str) {
        self.languages
            .entry(lang.to_string())
            .or_default()
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    /// Stored template, treating an empty template as absent.
    pub fn get(&self, lang: &str, category: &str, key: &str) -> Option<&str> {
        self.languages
            .get(lang)?
            .get(category)?
            .get(key)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }

    pub fn has_category(&self, lang: &str, category: &str) -> bool {
        self.languages
            .get(lang)
            .is_some_and(|categories| categories.contains_key(category))
    }

    /// Number of templates stored for `lang`.
    pub fn template_count(&self, lang: &str) -> usize {
        self.languages
            .get(lang)
            .map(|categories| categories.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    /// `category.key` identifiers present in `reference` but not in `lang`,
    /// sorted.
    pub fn missing_keys(&self, lang: &str, reference: &str) -> Vec<String> {
        let Some(categories) = self.languages.get(reference) else {
            return Vec::new();
        };
        let mut missing: Vec<String> = categories
            .iter()
            .flat_map(|(category, keys)| {
                keys.keys()
                    .filter(move |key| self.get(lang, category, key).is_none())
                    .map(move |key| format!("{}.{}", category, key))
            })
            .collect();
        missing.sort();
        missing
    }
}

/// The loaded bundle plus the languages discovered, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct LocaleStore {
    bundle: LocaleBundle,
    languages: Vec<String>,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one template, registering its language on first sight.
    pub fn insert(&mut self, lang: &str, category: &str, key: &str, template: &str) {
        self.register(lang);
        self.bundle.insert(lang, category, key, template);
    }

    fn register(&mut self, lang: &str) {
        if !self.has_language(lang) {
            self.languages.push(lang.to_string());
        }
    }

    pub fn bundle(&self) -> &LocaleBundle {
        &self.bundle
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.iter().any(|known| known == lang)
    }

    /// Owned copy of the discovered language codes.
    pub fn available_languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    /// Scan `root` and build the store. Problems are logged, never returned.
    pub fn load(root: &Path, logger: &Logger) -> Self {
        logger.info(format!("Loading language files from: {}", root.display()));

        let mut store = LocaleStore::new();
        let entries = match sorted_entries(root) {
            Ok(entries) => entries,
            Err(source) => {
                let err = LocaleError::Root {
                    path: root.to_path_buf(),
                    source,
                };
                logger.error(format!("[i18n] {}", err));
                return store;
            }
        };

        for path in entries {
            if path.is_dir() {
                store.load_directory(&path, logger);
            } else if is_bundle_file(&path) {
                store.load_flat_file(&path, logger);
            } else {
                logger.debug(format!("[i18n] Ignoring {}", path.display()));
            }
        }

        if !store.has_language(FALLBACK_LANGUAGE) {
            logger.warn(format!(
                "[i18n] Warning: fallback language '{}' not found.",
                FALLBACK_LANGUAGE
            ));
        }

        let listed: Vec<String> = store
            .languages
            .iter()
            .map(|lang| lang.yellow().to_string())
            .collect();
        logger.success(format!("Loaded languages: {}", listed.join(", ")));

        store
    }

    fn load_directory(&mut self, dir: &Path, logger: &Logger) {
        let Some(lang) = entry_name(dir) else {
            logger.warn(format!("[i18n] Skipping {}: not a valid language code", dir.display()));
            return;
        };
        self.register(&lang);

        let files = match sorted_entries(dir) {
            Ok(files) => files,
            Err(source) => {
                let err = LocaleError::Read {
                    path: dir.to_path_buf(),
                    source,
                };
                logger.warn(format!("[i18n] {}", err));
                return;
            }
        };

        for path in files.into_iter().filter(|p| p.is_file() && is_bundle_file(p)) {
            let Some(category) = entry_name(&path) else {
                continue;
            };
            match read_document(&path) {
                Ok(Value::Object(entries)) => {
                    self.merge_category(&lang, &category, &entries, &path, logger);
                }
                Ok(_) => logger.warn(format!(
                    "[i18n] {}",
                    LocaleError::Parse {
                        path: path.clone(),
                        reason: "expected a mapping of keys to strings".to_string(),
                    }
                )),
                Err(err) => logger.warn(format!("[i18n] {}", err)),
            }
        }
    }

    fn load_flat_file(&mut self, path: &Path, logger: &Logger) {
        let Some(lang) = entry_name(path) else {
            logger.warn(format!("[i18n] Skipping {}: not a valid language code", path.display()));
            return;
        };

        let entries = match read_document(path) {
            Ok(Value::Object(entries)) => entries,
            Ok(_) => {
                let err = LocaleError::Parse {
                    path: path.to_path_buf(),
                    reason: "expected a mapping of keys to strings".to_string(),
                };
                logger.warn(format!("[i18n] {}", err));
                return;
            }
            Err(err) => {
                logger.warn(format!("[i18n] {}", err));
                return;
            }
        };

        self.register(&lang);
        for (key, value) in &entries {
            match value {
                Value::Object(group) => self.merge_category(&lang, key, group, path, logger),
                scalar => match (split_key(key), scalar_text(scalar)) {
                    (Some((category, short)), Some(text)) => {
                        self.bundle.insert(&lang, category, short, &text)
                    }
                    (None, Some(_)) => logger.warn(format!(
                        "[i18n] Skipping '{}' in {}: flat keys must look like \"category.key\"",
                        key,
                        path.display()
                    )),
                    (_, None) => skip_unaddressable(key, path, logger),
                },
            }
        }
    }

    fn merge_category(
        &mut self,
        lang: &str,
        category: &str,
        entries: &Map<String, Value>,
        path: &Path,
        logger: &Logger,
    ) {
        for (key, value) in entries {
            match scalar_text(value) {
                Some(text) if !key.contains('.') => self.bundle.insert(lang, category, key, &text),
                _ => skip_unaddressable(key, path, logger),
            }
        }
    }
}

fn skip_unaddressable(key: &str, path: &Path, logger: &Logger) {
    logger.debug(format!(
        "[i18n] Skipping '{}' in {}: not addressable as \"category.key\"",
        key,
        path.display()
    ));
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Directory entries sorted by file name, hidden entries excluded.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !name.starts_with('.'))
        })
        .collect();
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn is_bundle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Directory name or file stem, if usable as a language or category code.
fn entry_name(path: &Path) -> Option<String> {
    let name = if path.is_dir() {
        path.file_name()
    } else {
        path.file_stem()
    }?;
    let name = name.to_str()?;
    if name.is_empty() || name.contains('.') {
        return None;
    }
    Some(name.to_string())
}

fn read_document(path: &Path) -> Result<Value, LocaleError> {
    let content = fs::read_to_string(path).map_err(|source| LocaleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |reason: String| LocaleError::Parse {
        path: path.to_path_buf(),
        reason,
    };
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ext == "json" {
        serde_json::from_str(&content).map_err(|err| parse_error(err.to_string()))
    } else {
        serde_yaml::from_str(&content).map_err(|err| parse_error(err.to_string()))
    }
}
