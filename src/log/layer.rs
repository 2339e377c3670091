// SPDX-License-Identifier: PMPL-1.0-or-later

//! `tracing` integration.
//!
//! Hosts that log through `tracing` macros get the same lines as direct
//! [`Logger`] calls. An optional `kind` field selects an enriched label:
//!
//! ```no_run
//! # use lingolog::log::{install_tracing, Logger};
//! # let logger = Logger::builder("bot").build();
//! install_tracing(&logger).ok();
//! tracing::info!(kind = "database", "Connected to MySQL");
//! ```

use super::bridge::SeverityBridge;
use super::level::{Level, Severity};
use super::logger::Logger;
use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Forwards every event to a [`Logger`].
#[derive(Debug, Clone)]
pub struct ConsoleLayer {
    logger: Logger,
}

impl ConsoleLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

fn severity_of(level: &tracing::Level) -> Severity {
    match *level {
        tracing::Level::ERROR => Severity::Error,
        tracing::Level::WARN => Severity::Warn,
        tracing::Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = severity_of(event.metadata().level());
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let mut bridge = SeverityBridge::new();
        if let Some(level) = fields.kind.as_deref().and_then(Level::from_kind) {
            bridge.arm(level);
        }
        self.logger.emit(severity, &mut bridge, &fields.render());
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    kind: Option<String>,
    extra: Vec<(&'static str, String)>,
}

impl EventFields {
    fn render(self) -> String {
        let mut out = self.message;
        for (name, value) in self.extra {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}={}", name, value);
        }
        out
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "kind" => self.kind = Some(value.to_string()),
            name => self.extra.push((name, value.to_string())),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            "kind" => self.kind = Some(format!("{:?}", value).trim_matches('"').to_string()),
            name => self.extra.push((name, format!("{:?}", value))),
        }
    }
}

/// Install a global subscriber that routes `tracing` events to `logger`.
///
/// `RUST_LOG` narrows which events reach the logger; the logger's own
/// threshold still applies afterwards.
pub fn install_tracing(logger: &Logger) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(logger.clone()))
        .try_init()
}
