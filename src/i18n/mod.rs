// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for user-facing strings.
//!
//! Bundles are loaded once from a locale root (see [`LocaleStore`]) and
//! then only read. Keys use a single dotted namespace, `"category.key"`:
//! `"ping.reply"`, `"commands.name"`.
//!
//! Lookups fall back to English when a key is missing in the requested
//! language. If it is missing in English too, the key string itself is
//! returned (fail-open, never panics).

mod store;
mod translator;

pub use store::{LocaleBundle, LocaleStore};
pub use translator::{interpolate, Translator};
