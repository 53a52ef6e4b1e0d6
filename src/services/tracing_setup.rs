//! Tracing subscriber setup
//!
//! This module provides the tracing configuration shared by the command-line
//! driver and tests.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Logs go to `log_file` when given, otherwise to stderr. `RUST_LOG` is
/// honoured when set; otherwise INFO is the level (DEBUG when `verbose`).
pub fn init_global(log_file: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing::subscriber::set_global_default(build_subscriber(Arc::new(file), verbose))
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            tracing::subscriber::set_global_default(build_subscriber(std::io::stderr, verbose))
                .context("Failed to install tracing subscriber")?;
        }
    }
    Ok(())
}

/// Build a subscriber writing formatted events to `writer`, filtered by `RUST_LOG`.
///
/// This is the core subscriber configuration shared between the driver and tests.
pub fn build_subscriber<W>(writer: W, verbose: bool) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_subscriber_with_directives(writer, rust_log.as_deref(), verbose)
}

/// Build a subscriber using explicit `RUST_LOG`-style directives.
///
/// The `verbose` level only applies when `directives` is absent or empty.
pub fn build_subscriber_with_directives<W>(
    writer: W,
    directives: Option<&str>,
    verbose: bool,
) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(directives, verbose))
}

fn env_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}
