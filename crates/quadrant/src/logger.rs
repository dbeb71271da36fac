//! File-based logging for Quadrant.
//!
//! Each run writes to `~/.quadrant/logs/{timestamp}_{uuid}/log` and mirrors
//! every line to stderr.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

pub struct QuadrantLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl QuadrantLogger {
    /// A logger that only writes to stderr.
    pub fn stderr(level: LevelFilter) -> Self {
        Self { level, file: None }
    }

    /// A logger writing to `log` inside `log_dir`, creating the directory.
    pub fn with_dir(level: LevelFilter, log_dir: &Path) -> Result<(Self, PathBuf)> {
        create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok((
            Self {
                level,
                file: Some(Mutex::new(file)),
            },
            log_path,
        ))
    }

    /// `{timestamp}_{first uuid segment}`, unique per run.
    pub fn new_run_id() -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let uuid_string = Uuid::new_v4().to_string();
        let uuid = uuid_string.split('-').next().unwrap_or("unknown");
        format!("{timestamp}_{uuid}")
    }

    /// Returns the path to the log directory for a run
    pub fn log_dir(run_id: &str) -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".quadrant").join("logs").join(run_id))
    }

    /// Install the global logger.
    ///
    /// With `log_to_file` the per-run log file is created first; if that
    /// fails the error is reported on stderr and logging continues on stderr
    /// only.
    pub fn init(level: LevelFilter, log_to_file: bool) -> Result<()> {
        let mut log_path = None;
        let logger = if log_to_file {
            let run_id = Self::new_run_id();
            match Self::log_dir(&run_id).and_then(|dir| Self::with_dir(level, &dir)) {
                Ok((logger, path)) => {
                    log_path = Some(path);
                    logger
                }
                Err(err) => {
                    eprintln!("Logging to stderr only: {err:#}");
                    Self::stderr(level)
                }
            }
        } else {
            Self::stderr(level)
        };

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        if let Some(path) = log_path {
            log::info!("Log file: {}", path.display());
        }
        Ok(())
    }

    fn format(record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for QuadrantLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = Self::format(record);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed write must not take the app down
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
            }
        }

        eprintln!("{}", message);
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}
