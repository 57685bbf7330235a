//! File logging for the terminal host.
//!
//! The TUI owns stdout and stderr, so every event goes to a per-session file
//! under the platform cache directory. `cargo xtask tail-logs` follows it.
//!
//! Each run writes `<log_dir>/session_<unix secs>/menu.log`; [`sessions`]
//! reads that layout back for tooling.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// File name written inside each session directory.
pub const LOG_FILE: &str = "menu.log";

const SESSION_PREFIX: &str = "session_";

/// Platform log directory shared with `xtask`.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "menu-demo")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/menu-demo"))
        .join("logs")
}

/// One run of the demo, as found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSession {
    pub id: String,
    /// Start time in Unix seconds, taken from the directory name.
    pub started: u64,
    pub dir: PathBuf,
}

impl LogSession {
    fn parse(dir: PathBuf) -> Option<Self> {
        let id = dir.file_name()?.to_str()?.to_owned();
        let started = id.strip_prefix(SESSION_PREFIX)?.parse().ok()?;
        Some(Self { id, started, dir })
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}

/// Sessions under `log_dir`, newest first. Directories not named by
/// [`setup_logging`] are skipped; a missing `log_dir` has no sessions.
pub fn sessions(log_dir: &Path) -> Result<Vec<LogSession>> {
    if !log_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory {}", log_dir.display()))?;

    let mut sessions = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_dir()
            && let Some(session) = LogSession::parse(path)
        {
            sessions.push(session);
        }
    }
    sessions.sort_by(|a, b| b.started.cmp(&a.started).then_with(|| b.id.cmp(&a.id)));
    Ok(sessions)
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered lines are lost.
pub fn setup_logging() -> Result<WorkerGuard> {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    let session_id = format!("{SESSION_PREFIX}{started}");

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Plain text so `xtask tail-logs` can parse level and target.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_sort_by_start_time_and_skip_strays() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["session_900", "session_1000", "session_abc", "notes"] {
            std::fs::create_dir(temp.path().join(name)).unwrap();
        }
        std::fs::write(temp.path().join("session_5"), "not a dir").unwrap();

        let found = sessions(temp.path()).unwrap();
        let ids: Vec<_> = found.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["session_1000", "session_900"]);
        assert_eq!(found[0].started, 1000);
        assert_eq!(
            found[0].log_file(),
            temp.path().join("session_1000").join(LOG_FILE)
        );
    }

    #[test]
    fn missing_log_dir_has_no_sessions() {
        let temp = tempfile::tempdir().unwrap();
        assert!(sessions(&temp.path().join("absent")).unwrap().is_empty());
    }
}
