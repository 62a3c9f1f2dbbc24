//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend exactly once per process.
//! - Route events to stderr or to rolling files under a directory.
//!
//! # Invariants
//! - Logging init is idempotent for an identical config.
//! - Re-initialization with a different level or target is rejected.
//! - Logging initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "masthead";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    config: LoggingConfig,
    handle: LoggerHandle,
}

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Rolling files in this absolute directory.
    Directory(PathBuf),
}

/// Logging settings. The default uses `default_log_level()` on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            target: LogTarget::Stderr,
        }
    }
}

/// Logging bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidDirectory(String),
    /// Logging is already active with a different config.
    Conflict {
        active: String,
        requested: String,
    },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDirectory(message) => write!(f, "invalid log directory: {message}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already initialized with {active}; refusing to switch to {requested}"
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes process logging.
///
/// # Errors
/// - `UnsupportedLevel` for an unknown level string.
/// - `InvalidDirectory` when a directory target is relative or cannot be
///   created.
/// - `Conflict` when logging already runs with another config.
/// - `Backend` when `flexi_logger` fails to start.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let normalized = LoggingConfig {
        level: normalize_level(&config.level)?.to_string(),
        target: normalize_target(&config.target)?,
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(normalized.clone()))?;
    if state.config != normalized {
        return Err(LoggingError::Conflict {
            active: describe(&state.config),
            requested: describe(&normalized),
        });
    }
    Ok(())
}

/// Returns the active logging config, or `None` before initialization.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// Writes out any buffered log lines. No-op before initialization.
///
/// The logger handle lives in a static that is never dropped, so callers
/// must flush before the process exits.
pub fn flush_logging() {
    if let Some(state) = LOGGING_STATE.get() {
        state.handle.flush();
    }
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: LoggingConfig) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(&config.level)
        .map_err(|err| LoggingError::UnsupportedLevel(format!("{}: {err}", config.level)))?;

    // Stderr is unbuffered; file output is buffered and flushed by
    // `flush_logging` or the background flusher.
    let logger = match &config.target {
        LogTarget::Stderr => logger.log_to_stderr().write_mode(WriteMode::Direct),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                LoggingError::InvalidDirectory(format!("cannot create `{}`: {err}", dir.display()))
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .write_mode(WriteMode::BufferAndFlush)
        }
    };

    let handle = logger
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    info!(
        "event=core_init module=core status=ok level={} target={} version={}",
        config.level,
        target_label(&config.target),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState { config, handle })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_target(target: &LogTarget) -> Result<LogTarget, LoggingError> {
    match target {
        LogTarget::Stderr => Ok(LogTarget::Stderr),
        LogTarget::Directory(dir) => {
            if dir.as_os_str().is_empty() {
                return Err(LoggingError::InvalidDirectory(
                    "path cannot be empty".to_string(),
                ));
            }
            if !dir.is_absolute() {
                return Err(LoggingError::InvalidDirectory(format!(
                    "path must be absolute, got `{}`",
                    dir.display()
                )));
            }
            Ok(LogTarget::Directory(dir.clone()))
        }
    }
}

fn target_label(target: &LogTarget) -> String {
    match target {
        LogTarget::Stderr => "stderr".to_string(),
        LogTarget::Directory(dir) => dir.display().to_string(),
    }
}

fn describe(config: &LoggingConfig) -> String {
    format!(
        "level `{}` target `{}`",
        config.level,
        target_label(&config.target)
    )
}
