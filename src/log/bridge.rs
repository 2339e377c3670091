// SPDX-License-Identifier: PMPL-1.0-or-later

//! One-shot bridge between enriched levels and the plain severity set.
//!
//! An enriched call (success, command, database) arms the bridge and then
//! logs at its underlying severity; the formatting step consumes the bridge
//! to pick the badge. The bridge is created per call, so two overlapping
//! calls never see each other's armed level.
//!
//! ```text
//! Idle --arm(level)--> Armed(level) --consume--> Idle
//! ```

use super::level::{Level, Severity};
use colored::ColoredString;

/// Label and color chosen for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    level: Level,
}

impl Badge {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn render(&self) -> ColoredString {
        self.level.paint(self.level.label())
    }
}

/// Holds at most one armed level.
#[derive(Debug, Default)]
pub struct SeverityBridge {
    armed: Option<Level>,
}

impl SeverityBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `level` for the next consume. Arming twice keeps only the
    /// latest level; this is a slot, not a queue.
    pub fn arm(&mut self, level: Level) {
        self.armed = Some(level);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Pick the badge for a record logged at `severity` and return to idle.
    pub fn consume(&mut self, severity: Severity) -> Badge {
        match self.armed.take() {
            Some(level) => Badge::new(level),
            None => Badge::new(Level::from(severity)),
        }
    }
}
