// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console line formatting.
//!
//! A record renders as
//!
//! ```text
//! ⌚ 10/19/2026 │ 3:04:05 PM │ RAM: 41.27MB │ INFO ❱ first line
//!                                                  second line
//! ```
//!
//! Continuation lines are padded to the *visible* width of the prefix, so
//! the escape codes in the colored prefix never skew the alignment.

use super::bridge::Badge;
use super::memory::{format_memory_usage, resident_set_size};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use colored::Colorize;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

const SEPARATOR: &str = " │ ";
const ARROW: &str = "❱";

fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\x1B(?:[@-Z\\\]^_]|\[[0-?]*[ -/]*[@-~])").expect("ANSI pattern is valid")
    })
}

/// Remove color and other escape sequences.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ansi_pattern().replace_all(text, "")
}

/// Printable character count of `text` once escapes are removed.
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Renders records for a single display time zone.
#[derive(Debug, Clone)]
pub struct LogFormatter {
    time_zone: Tz,
}

impl LogFormatter {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Format `message` using the current time and resident memory.
    pub fn format(&self, badge: &Badge, message: &str) -> String {
        self.format_at(badge, message, Utc::now(), resident_set_size())
    }

    /// Format `message` for a fixed instant and memory reading.
    pub fn format_at(&self, badge: &Badge, message: &str, now: DateTime<Utc>, rss: u64) -> String {
        let prefix = self.prefix(badge, now, rss);
        let indent = " ".repeat(visible_width(&prefix) + 1);

        message
            .split('\n')
            .enumerate()
            .map(|(index, line)| {
                if index == 0 {
                    format!("{} {}", prefix, line)
                } else {
                    format!("{}{}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Colored prefix up to and including the arrow marker.
    pub fn prefix(&self, badge: &Badge, now: DateTime<Utc>, rss: u64) -> String {
        let separator = SEPARATOR.bright_black();
        format!(
            "{}{}{}{}{} {}",
            self.timestamp(now).bright_black().bold(),
            separator,
            format!("RAM: {}", format_memory_usage(rss).bright_magenta())
                .bright_black()
                .bold(),
            separator,
            badge.render(),
            ARROW.bright_black().bold(),
        )
    }

    fn timestamp(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&self.time_zone);
        format!(
            "⌚ {}{}{}",
            local.format("%-m/%-d/%Y"),
            SEPARATOR,
            local.format("%-I:%M:%S %p")
        )
    }
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::level::Level;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 7, 21, 4, 5).unwrap()
    }

    #[test]
    fn strips_color_sequences() {
        colored::control::set_override(true);
        let painted = format!("{} plain", "red".red().bold());
        assert!(painted.contains('\x1B'));
        assert_eq!(strip_ansi(&painted), "red plain");
        assert_eq!(visible_width(&painted), "red plain".len());
    }

    #[test]
    fn prefix_renders_tokens_in_order() {
        let formatter = LogFormatter::default();
        let prefix = formatter.prefix(&Badge::new(Level::Success), instant(), 1_536_000);
        assert_eq!(
            strip_ansi(&prefix),
            "⌚ 3/7/2026 │ 9:04:05 PM │ RAM: 1.46MB │ SUCCESS ❱"
        );
    }

    #[test]
    fn timestamp_follows_display_zone() {
        let formatter = LogFormatter::new(chrono_tz::Europe::Prague);
        let prefix = formatter.prefix(&Badge::new(Level::Info), instant(), 0);
        assert!(strip_ansi(&prefix).starts_with("⌚ 3/7/2026 │ 10:04:05 PM"));
    }

    #[test]
    fn continuation_lines_align_under_message() {
        colored::control::set_override(true);
        let formatter = LogFormatter::default();
        let badge = Badge::new(Level::Command);
        let output = formatter.format_at(&badge, "first\nsecond\nthird", instant(), 2048);
        let prefix = formatter.prefix(&badge, instant(), 2048);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let expected = visible_width(&prefix) + 1;
        for line in &lines[1..] {
            let leading = line.len() - line.trim_start_matches(' ').len();
            assert_eq!(leading, expected);
        }

        let first = strip_ansi(lines[0]);
        let second = lines[1];
        assert_eq!(first.chars().position(|c| c == 'f'), Some(expected));
        assert_eq!(second.chars().position(|c| c == 's'), Some(expected));
    }

    #[test]
    fn single_line_has_no_padding_lines() {
        let formatter = LogFormatter::default();
        let output = formatter.format_at(&Badge::new(Level::Info), "ready", instant(), 0);
        assert_eq!(output.lines().count(), 1);
        assert!(strip_ansi(&output).ends_with("INFO ❱ ready"));
    }
}
