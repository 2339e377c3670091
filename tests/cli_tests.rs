// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command output of the lingolog binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn locales() -> TempDir {
    let dir = TempDir::new().unwrap();
    let en = dir.path().join("en");
    fs::create_dir_all(&en).unwrap();
    fs::write(en.join("ping.json"), r#"{"reply": "Pong!", "latency": "{ms}ms"}"#).unwrap();
    fs::create_dir_all(dir.path().join("cs")).unwrap();
    fs::write(dir.path().join("cs/ping.json"), r#"{"reply": "Pong!"}"#).unwrap();
    dir
}

fn lingolog(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lingolog"))
        .arg("--locales")
        .arg(root)
        .args(args)
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_SAVE_TO_FILE")
        .env_remove("TIME_ZONE")
        .output()
        .expect("binary should run")
}

#[test]
fn test_translate_prints_only_the_text() {
    let dir = locales();
    let output = lingolog(dir.path(), &["translate", "ping.reply", "-l", "cs"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Pong!\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Loaded languages: cs, en"));
}

#[test]
fn test_translate_with_vars() {
    let dir = locales();
    let output = lingolog(dir.path(), &["translate", "ping.latency", "-v", "ms=12"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "12ms\n");
}

#[test]
fn test_languages_json_is_parseable() {
    let dir = locales();
    let output = lingolog(dir.path(), &["languages", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    let codes: Vec<&str> = summary
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["cs", "en"]);
    assert_eq!(summary[0]["missing"][0], "ping.latency");
}
