// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console logging.
//!
//! Records render as a single aligned block: timestamp, resident memory,
//! a colored level badge and the message. Enriched levels (`SUCCESS`,
//! `CMD`, `DB`) keep their own badge but filter as `INFO`.

mod bridge;
mod formatter;
mod layer;
mod level;
mod logger;
mod memory;
mod sink;

pub use bridge::{Badge, SeverityBridge};
pub use formatter::{strip_ansi, visible_width, LogFormatter};
pub use layer::{install_tracing, ConsoleLayer};
pub use level::{Level, Severity};
pub use logger::{CommandLog, Logger, LoggerBuilder};
pub use memory::{format_memory_usage, resident_set_size};
pub use sink::{CapturedRecord, ConsoleSink, ConsoleStream, FileSink, LogSink, MemorySink};
