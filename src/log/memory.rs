// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resident memory reading and byte formatting.

use std::fs;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with two decimals and a unit suffix, e.g. `"1.46MB"`.
pub fn format_memory_usage(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2}{}", value, UNITS[unit])
}

/// Resident set size of the current process in bytes.
///
/// Read from `VmRSS` in `/proc/self/status`; returns 0 where that file is
/// unavailable (non-Linux hosts, restricted sandboxes).
pub fn resident_set_size() -> u64 {
    fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_rss(&status))
        .unwrap_or(0)
}

fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let mut parts = line["VmRSS:".len()..].split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    let scale = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        Some("kb") | None => 1024,
        Some("mb") => 1024 * 1024,
        Some("b") => 1,
        Some(_) => return None,
    };
    Some(amount * scale)
}
