// SPDX-License-Identifier: PMPL-1.0-or-later

//! lingolog: inspect translation bundles and preview log output.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use lingolog::config::{Config, FALLBACK_LANGUAGE};
use lingolog::diagnostics::{self, Status};
use lingolog::i18n::Translator;
use lingolog::log::{install_tracing, CommandLog, ConsoleStream, Level, Logger, Severity};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lingolog")]
#[command(version)]
#[command(about = "Aligned console logging and fallback-aware translation bundles")]
#[command(long_about = None)]
struct Cli {
    /// Locale root (overrides LOCALES_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Minimum severity to print (overrides LOG_LEVEL)
    #[arg(long, global = true, value_enum)]
    level: Option<SeverityArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key
    Translate {
        /// Key in the form category.key
        #[arg(value_name = "KEY")]
        key: String,

        /// Language code
        #[arg(short, long, default_value = FALLBACK_LANGUAGE)]
        lang: String,

        /// Template variable, repeatable
        #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// List languages discovered under the locale root
    Languages {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check configuration and translation coverage
    Check,

    /// Print one record per level
    Demo,
}

impl Commands {
    /// Commands whose stdout is a payload; their log records go to stderr.
    fn prints_data(&self) -> bool {
        !matches!(self, Commands::Demo)
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SeverityArg {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Debug => Severity::Debug,
            SeverityArg::Info => Severity::Info,
            SeverityArg::Warn => Severity::Warn,
            SeverityArg::Error => Severity::Error,
            SeverityArg::Fatal => Severity::Fatal,
        }
    }
}

#[derive(Serialize)]
struct LanguageSummary {
    code: String,
    templates: usize,
    missing: Vec<String>,
}

fn parse_var(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        bail!("variable name is empty in '{}'", raw);
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(root) = cli.locales {
        config.locale.root = root;
    }
    if let Some(level) = cli.level {
        config.log.min_severity = level.into();
    }
    if cli.command.prints_data() {
        config.log.console = ConsoleStream::Stderr;
    }

    let logger = Logger::from_config(&config.log).context("setting up the logger")?;
    for issue in &config.issues {
        logger.warn(format!("{} (default used)", issue));
    }

    match cli.command {
        Commands::Translate { key, lang, vars } => {
            let translator = Translator::load(&config.locale, &logger);
            let text = if vars.is_empty() {
                translator.t(&key, &lang)
            } else {
                translator.t_with(&key, &lang, vars)
            };
            writeln!(io::stdout().lock(), "{}", text)?;
        }

        Commands::Languages { json } => {
            let translator = Translator::load(&config.locale, &logger);
            let bundle = translator.store().bundle();
            let summary: Vec<LanguageSummary> = translator
                .available_languages()
                .into_iter()
                .map(|code| LanguageSummary {
                    templates: bundle.template_count(&code),
                    missing: bundle.missing_keys(&code, FALLBACK_LANGUAGE),
                    code,
                })
                .collect();

            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                for entry in &summary {
                    writeln!(
                        out,
                        "  {:8} {:5} templates  {} missing",
                        entry.code,
                        entry.templates,
                        entry.missing.len()
                    )?;
                }
            }
        }

        Commands::Check => {
            let translator = Translator::load(&config.locale, &logger);
            let checks = diagnostics::run(&config, &translator);

            println!("\nlingolog self-check");
            for entry in &checks {
                entry.print();
            }
            if checks.iter().any(|entry| entry.status == Status::Error) {
                return Err(anyhow!("self-check reported issues"));
            }
        }

        Commands::Demo => {
            install_tracing(&logger).context("installing the tracing subscriber")?;

            for level in Level::all() {
                logger.log(*level, format!("{} record", level.label().to_lowercase()));
            }

            let mut invocation = CommandLog::new("ping");
            invocation.username = Some("JustWolf".to_string());
            invocation.user_id = Some("1234567890".to_string());
            invocation.shard_id = Some(0);
            invocation.cluster_id = Some(0);
            logger.command_invocation(&invocation);

            tracing::info!(kind = "database", "Connected through tracing");
            tracing::warn!(cluster = 1, "Heartbeat missed");
        }
    }

    Ok(())
}
