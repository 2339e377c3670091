// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation behaviour against bundles loaded from disk

use lingolog::config::LocaleConfig;
use lingolog::i18n::{LocaleStore, Translator};
use lingolog::log::{Logger, MemorySink, Severity};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn capture_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder("i18n-tests").sink(sink.clone()).build();
    (logger, sink)
}

/// en has `ping`, cs has only `help`.
fn bot_locales() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "en/ping.json",
        r#"{"reply": "Pong!", "latency": "Latency: {ms}ms"}"#,
    );
    write(dir.path(), "en/help.yaml", "title: Help\nusage: \"Use {prefix}{cmd} or {prefix}help\"\n");
    write(dir.path(), "cs/help.json", r#"{"title": "Nápověda"}"#);
    dir
}

fn load(root: &Path) -> (Translator, MemorySink) {
    let (logger, sink) = capture_logger();
    let config = LocaleConfig {
        root: root.to_path_buf(),
        ..LocaleConfig::default()
    };
    (Translator::load(&config, &logger), sink)
}

#[test]
fn test_stored_templates_are_returned_exactly() {
    let dir = bot_locales();
    let (t, _) = load(dir.path());

    assert_eq!(t.t("ping.reply", "en"), "Pong!");
    assert_eq!(t.t("help.title", "en"), "Help");
    assert_eq!(t.t("help.title", "cs"), "Nápověda");
}

#[test]
fn test_fallback_scenario() {
    let dir = bot_locales();
    let (t, _) = load(dir.path());

    assert_eq!(t.available_languages(), ["cs", "en"]);
    assert_eq!(t.t("ping.reply", "cs"), "Pong!");
    assert_eq!(t.t("ping.reply", "fr"), "Pong!");
    assert_eq!(t.t("ping.absent", "cs"), "ping.absent");
}

#[test]
fn test_literal_key_when_fallback_also_missing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en/other.json", r#"{"x": "y"}"#);
    write(dir.path(), "cs/other.json", r#"{"x": "z"}"#);
    let (t, _) = load(dir.path());

    assert_eq!(t.t("ping.reply", "cs"), "ping.reply");
}

#[test]
fn test_invalid_key_is_returned_with_warning() {
    let dir = bot_locales();
    let (t, sink) = load(dir.path());
    sink.clear();

    assert_eq!(t.t("pingreply", "en"), "pingreply");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Warn);
    assert!(records[0].text.contains("pingreply"));
}

#[test]
fn test_interpolation_replaces_every_occurrence() {
    let dir = bot_locales();
    let (t, _) = load(dir.path());

    assert_eq!(
        t.t_with("help.usage", "en", [("prefix", "!"), ("cmd", "ping")]),
        "Use !ping or !help"
    );
    assert_eq!(
        t.t_with("help.usage", "en", [("cmd", "ping")]),
        "Use {prefix}ping or {prefix}help"
    );
    assert_eq!(t.t_with("ping.latency", "cs", [("ms", 17)]), "Latency: 17ms");
}

#[test]
fn test_aliases_from_default_config() {
    let dir = bot_locales();
    let (t, _) = load(dir.path());

    assert_eq!(t.t("help.title", "en-US"), "Help");
    assert_eq!(t.t("help.title", "en-GB"), "Help");
}

#[test]
fn test_languages_are_distinct_sources() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en/ping.json", r#"{"reply": "Pong!"}"#);
    write(dir.path(), "en.json", r#"{"help": {"title": "Help"}}"#);
    write(dir.path(), "cs.yaml", "ping:\n  reply: Pong!\n");
    write(dir.path(), "de/ping.json", "{ broken");
    write(dir.path(), "README.md", "not a bundle");
    let (t, sink) = load(dir.path());

    let languages = t.available_languages();
    let distinct: HashSet<&String> = languages.iter().collect();
    assert_eq!(distinct.len(), languages.len());
    assert_eq!(languages, ["cs", "de", "en"]);

    assert_eq!(t.t("help.title", "en"), "Help");
    assert_eq!(t.t("ping.reply", "de"), "Pong!");
    assert!(sink.contains("Loaded languages: cs, de, en"));
}

#[test]
fn test_store_is_immutable_through_translator() {
    let mut store = LocaleStore::new();
    store.insert("en", "ping", "reply", "Pong!");
    let (logger, _) = capture_logger();
    let t = Translator::new(store, logger);

    let mut languages = t.available_languages();
    languages.clear();
    assert_eq!(t.available_languages(), ["en"]);
}
