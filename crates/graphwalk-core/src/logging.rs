use tracing_subscriber::EnvFilter;

use crate::{GraphError, GraphResult};

/// Environment variable naming a file that receives debug-level logs.
pub const DEBUG_LOG_ENV: &str = "GRAPHWALK_DEBUG_LOG";

/// Install the global `tracing` subscriber.
///
/// With `GRAPHWALK_DEBUG_LOG` set, debug output is appended to that file.
/// Otherwise warnings go to stderr, unless `RUST_LOG` says otherwise.
pub fn init() -> GraphResult<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init()
            .map_err(|e| GraphError::Logging(e.to_string()))
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| GraphError::Logging(e.to_string()))
    }
}
