//! Logging setup.
//!
//! Non-interactive commands log to stderr. The TUI runs in the alternate
//! screen, where stray log lines would garble the display, so its logs are
//! written to a file under the platform data directory instead.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}

/// Returns a guard that must stay alive for the duration of the TUI; dropping
/// it flushes buffered log lines.
pub fn init_file() -> Result<WorkerGuard> {
    let dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("evtab")
        .join("logs");
    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, "evtab.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
