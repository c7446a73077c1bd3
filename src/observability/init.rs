//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "swipekit.log";

/// Initializes the global tracing subscriber with a rotating file writer.
///
/// The filter comes from `config.trace_level`, defaulting to `"info"`. Logs
/// go to `<data_dir>/swipekit.log`.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use swipekit::observability::init_tracing;
/// use swipekit::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: Some(dir.path().display().to_string()),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFile::new(data_dir.join(LOG_FILE_NAME));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer)
        .try_init();
}
