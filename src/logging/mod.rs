//! Tracing subscriber setup: stdout plus a rolling log file.
mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "grocery-daemon.log";
/// Target the default filter applies to.
const LOG_TARGET: &str = "grocery_daemon";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Default level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl LogConfig {
    /// `~/.grocery/logs`, or `./.grocery/logs` without a home directory.
    #[must_use]
    pub fn default_log_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".grocery")
            .join("logs")
    }
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: Self::default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
