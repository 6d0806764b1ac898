use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, SecondsFormat};
use log::{LevelFilter, Record};

use crate::error::PaymentResourceError;

const LEVEL_VARS: [&str; 2] = ["PAYMENT_RESOURCE_LOG_LEVEL", "RUST_LOG"];
const DIR_VAR: &str = "PAYMENT_RESOURCE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = LEVEL_VARS
            .iter()
            .find_map(|key| lookup(key))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(LevelFilter::Info);

        let dir = lookup(DIR_VAR)
            .filter(|raw| !matches!(raw.as_str(), "" | "off" | "none"))
            .map(PathBuf::from);

        Self { level, dir }
    }
}

/// Installs the global logger. Fails with `Logger` if one is already set.
pub fn init_logging(app_name: &str, config: &LogConfig) -> Result<(), PaymentResourceError> {
    // stdout carries command output
    let mut dispatch = fern::Dispatch::new()
        .level(config.level)
        .format(format_line)
        .chain(std::io::stderr());

    if let Some(dir) = &config.dir {
        std::fs::create_dir_all(dir)?;
        let path = log_file_path(dir, app_name, Local::now().date_naive());
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

fn format_line(out: fern::FormatCallback, message: &fmt::Arguments, record: &Record) {
    out.finish(format_args!(
        "{} {:<5} [{}] {}",
        Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
        record.level(),
        record.target(),
        message
    ))
}

fn log_file_path(dir: &Path, app_name: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{app_name}-{}.log", date.format("%Y%m%d")))
}
