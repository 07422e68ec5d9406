use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber
///
/// `RUST_LOG` wins over `default_level`. With a `log_dir` the output goes to a
/// timestamped file in that directory, otherwise to stderr.
pub fn init_logger(log_dir: Option<&Path>, default_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false);

    match log_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = dir.join(format!("nurl_{}.log", timestamp));
            let subscriber = builder
                .with_file(true)
                .with_line_number(true)
                .with_writer(fs::File::create(&log_file)?)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            info!("Logger initialized at {}", log_file.display());
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
