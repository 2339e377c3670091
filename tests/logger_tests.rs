// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log line rendering and the logger service

use chrono::{TimeZone, Utc};
use lingolog::config::LogConfig;
use lingolog::log::{
    format_memory_usage, strip_ansi, visible_width, Badge, Level, LogFormatter, Logger,
    MemorySink, Severity, SeverityBridge,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_memory_usage_reference_values() {
    assert_eq!(format_memory_usage(0), "0.00B");
    assert_eq!(format_memory_usage(1024), "1.00KB");
    assert_eq!(format_memory_usage(1_536_000), "1.46MB");
    assert_eq!(format_memory_usage(3 * 1024 * 1024 * 1024), "3.00GB");
}

#[test]
fn test_second_line_indent_matches_visible_prefix() {
    colored::control::set_override(true);
    let formatter = LogFormatter::new(chrono_tz::America::New_York);
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    let badge = Badge::new(Level::Database);

    let output = formatter.format_at(&badge, "Connected to MySQL\n📦 bot_db", now, 52_428_800);
    let prefix = formatter.prefix(&badge, now, 52_428_800);
    assert!(prefix.len() > visible_width(&prefix), "prefix should carry escapes");

    let second = output.lines().nth(1).expect("two lines");
    let leading = second.chars().take_while(|c| *c == ' ').count();
    assert_eq!(leading, strip_ansi(&prefix).chars().count() + 1);
    assert_eq!(second.trim_start(), "📦 bot_db");

    let first = strip_ansi(output.lines().next().unwrap()).into_owned();
    assert_eq!(
        first,
        "⌚ 10/19/2026 │ 4:30:00 AM │ RAM: 50.00MB │ DB ❱ Connected to MySQL"
    );
}

#[test]
fn test_bridge_lifecycle() {
    let mut bridge = SeverityBridge::new();
    assert!(!bridge.is_armed());

    bridge.arm(Level::Success);
    assert!(bridge.is_armed());
    assert_eq!(bridge.consume(Severity::Info).label(), "SUCCESS");

    assert!(!bridge.is_armed());
    assert_eq!(bridge.consume(Severity::Error).label(), "ERROR");
}

#[test]
fn test_every_level_renders_its_label() {
    let sink = MemorySink::new();
    let logger = Logger::builder("levels").sink(sink.clone()).build();

    for level in Level::all() {
        logger.log(*level, "x");
    }

    let records = sink.records();
    assert_eq!(records.len(), Level::all().len());
    for (record, level) in records.iter().zip(Level::all()) {
        assert!(record.text.ends_with(&format!("{} ❱ x", level.label())));
        assert_eq!(record.severity, level.severity());
    }
}

#[test]
fn test_concurrent_enriched_calls_keep_their_labels() {
    let sink = MemorySink::new();
    let logger = Logger::builder("threads").sink(sink.clone()).build();

    let handles: Vec<_> = [Level::Success, Level::Command, Level::Database, Level::Info]
        .into_iter()
        .map(|level| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    logger.log(level, format!("from {}", level.label()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = sink.records();
    assert_eq!(records.len(), 200);
    for record in &records {
        let label = record
            .text
            .rsplit("from ")
            .next()
            .expect("message present");
        assert!(
            record.text.contains(&format!("{} ❱ from {}", label, label)),
            "label mismatch in {:?}",
            record.text
        );
    }
}

#[test]
fn test_save_to_file_writes_plain_lines() {
    let dir = TempDir::new().unwrap();
    let mut config = LogConfig::named("shard");
    config.save_to_file = true;
    config.file_path = dir.path().join("logs/shard.log");
    config.min_severity = Severity::Info;

    let logger = Logger::from_config(&config).expect("logger should build");
    logger.debug("skipped");
    logger.success("saved\nsecond line");
    drop(logger);

    let content = fs::read_to_string(dir.path().join("logs/shard.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("SUCCESS ❱ saved"));
    assert!(!lines[0].contains('\x1B'));
    assert_eq!(lines[1].trim_start(), "second line");
}
