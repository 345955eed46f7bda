//! File logging for the terminal UI.
//!
//! Stderr belongs to the TUI, so every log line goes to
//! `<log dir>/<session>/client.log` instead.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber writing to a session log file.
///
/// `log_dir` overrides the platform cache directory. The returned guard
/// flushes buffered lines when dropped and must be held until exit.
pub fn setup_logging(log_dir: Option<PathBuf>, session_id: Option<String>) -> Result<WorkerGuard> {
    let log_dir = log_dir.unwrap_or_else(default_log_dir);
    let session_id = session_id.unwrap_or_else(new_session_id);
    let session_log_dir = prepare_session_dir(&log_dir, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/elevator-sim/logs`
/// - Linux: `~/.cache/elevator-sim/logs` (or `$XDG_CACHE_HOME/elevator-sim/logs`)
/// - Windows: `%LOCALAPPDATA%\elevator-sim\cache\logs`
/// - Fallback: `<temp dir>/elevator-sim/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "elevator-sim")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("elevator-sim"))
        .join("logs")
}

fn new_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

fn prepare_session_dir(log_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;
    Ok(session_log_dir)
}
