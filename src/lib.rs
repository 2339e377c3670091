// SPDX-License-Identifier: PMPL-1.0-or-later

//! lingolog — aligned console logging and fallback-aware translations.
//!
//! Two services, both built once at startup and passed to whoever needs
//! them:
//!
//! 1. **Logger**: renders `timestamp │ RAM │ LEVEL ❱ message` lines with
//!    continuation lines aligned under the message. Enriched levels
//!    (`SUCCESS`, `CMD`, `DB`) render with their own badge but filter as
//!    `INFO`.
//! 2. **Translator**: resolves `"category.key"` identifiers from bundles on
//!    disk, falling back to English and finally to the key itself.
//!
//! ```
//! use lingolog::i18n::{LocaleStore, Translator};
//! use lingolog::log::{Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder("bot").sink(sink.clone()).build();
//!
//! let mut store = LocaleStore::new();
//! store.insert("en", "ping", "reply", "Pong!");
//! let translator = Translator::new(store, logger.clone());
//!
//! assert_eq!(translator.t("ping.reply", "cs"), "Pong!");
//! logger.success(translator.t("ping.reply", "en"));
//! assert!(sink.contains("SUCCESS ❱ Pong!"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod log;
