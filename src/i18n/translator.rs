// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key resolution and interpolation.

use super::store::{split_key, LocaleStore};
use crate::config::{LocaleConfig, FALLBACK_LANGUAGE};
use crate::error::LocaleError;
use crate::log::Logger;
use std::collections::HashMap;
use std::fmt::Display;

/// Resolves `category.key` identifiers against a loaded [`LocaleStore`].
///
/// Lookups go requested language → `en` → the key itself, so a call never
/// fails and an untranslated string shows up as its key.
#[derive(Debug, Clone)]
pub struct Translator {
    store: LocaleStore,
    aliases: HashMap<String, String>,
    logger: Logger,
}

impl Translator {
    pub fn new(store: LocaleStore, logger: Logger) -> Self {
        Self {
            store,
            aliases: HashMap::new(),
            logger,
        }
    }

    /// Load the configured root and register its aliases.
    pub fn load(config: &LocaleConfig, logger: &Logger) -> Self {
        let store = LocaleStore::load(&config.root, logger);
        config
            .aliases
            .iter()
            .fold(Translator::new(store, logger.clone()), |translator, (alias, target)| {
                translator.with_alias(alias, target)
            })
    }

    /// Treat requests for `alias` (e.g. `en-US`) as requests for `target`.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(alias.to_string(), target.to_string());
        self
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    /// Bundle language a request for `lang` is served from first.
    pub fn resolve_language<'a>(&'a self, lang: &'a str) -> &'a str {
        self.aliases.get(lang).map(String::as_str).unwrap_or(lang)
    }

    /// Owned copy of the discovered language codes.
    pub fn available_languages(&self) -> Vec<String> {
        self.store.available_languages()
    }

    /// Translate `key` in the fallback language.
    pub fn t_default(&self, key: &str) -> String {
        self.t(key, FALLBACK_LANGUAGE)
    }

    /// Translate `key` for `lang` without interpolation.
    pub fn t(&self, key: &str, lang: &str) -> String {
        self.lookup(key, lang).to_string()
    }

    /// Translate `key` for `lang`, replacing every `{name}` with its value.
    ///
    /// ```
    /// # use lingolog::i18n::{LocaleStore, Translator};
    /// # use lingolog::log::{Logger, MemorySink};
    /// let mut store = LocaleStore::new();
    /// store.insert("en", "greet", "hello", "Hi {user}, {user}!");
    /// let logger = Logger::builder("doc").sink(MemorySink::new()).build();
    /// let translator = Translator::new(store, logger);
    /// assert_eq!(translator.t_with("greet.hello", "en", [("user", "Wolf")]), "Hi Wolf, Wolf!");
    /// ```
    pub fn t_with<I, K, V>(&self, key: &str, lang: &str, vars: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        interpolate(self.lookup(key, lang), vars)
    }

    fn lookup<'a>(&'a self, key: &'a str, lang: &str) -> &'a str {
        let Some((category, short)) = split_key(key) else {
            self.logger
                .warn(format!("[i18n] {}", LocaleError::InvalidKey(key.to_string())));
            return key;
        };

        let bundle = self.store.bundle();
        bundle
            .get(self.resolve_language(lang), category, short)
            .or_else(|| bundle.get(FALLBACK_LANGUAGE, category, short))
            .unwrap_or(key)
    }
}

/// Replace every `{name}` placeholder for each variable. Placeholders
/// without a variable are left as they are.
///
/// Variables are applied one after another in iteration order, so a value
/// that itself contains `{other}` is expanded by a later `other` variable.
pub fn interpolate<I, K, V>(template: &str, vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    vars.into_iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name.as_ref()), &value.to_string())
    })
}
