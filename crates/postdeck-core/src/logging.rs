//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs go to a daily-rolling file under `~/.local/share/postdeck/logs/` so
/// they never mix with the command output on stdout. The level is
/// controlled by the `POSTDECK_LOG` environment variable, defaulting to
/// `info` for this crate family and `warn` for everything else.
///
/// # Examples
/// ```bash
/// POSTDECK_LOG=debug postdeck list
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "postdeck.log");

    let env_filter = EnvFilter::try_from_env("POSTDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("postdeck=info,postdeck_app=info,postdeck_api=info,postdeck_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("postdeck starting, logging to {}", log_dir.display());
    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("postdeck").join("logs")
}
