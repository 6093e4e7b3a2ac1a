//! Application logging.
//!
//! [`Logger`] keeps an in-memory buffer shown in the logs dialog. Once
//! [`init_logging`] has run, records from the `log` facade land in that buffer
//! too, and in a log file when logging is enabled in the configuration.

use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Target used for messages that already went through [`Logger::log`].
const UI_LOG_TARGET: &str = "trivialist::ui_log";

/// Cap on buffered entries; the oldest are dropped first.
const MAX_BUFFERED_LOGS: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_BUFFERED_LOGS))),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: UI_LOG_TARGET, "{}", message);
        self.push(message);
    }

    fn push(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_BUFFERED_LOGS {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("trivialist");
        Ok(dir.join("trivialist.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global `log` backend.
///
/// Warnings and errors from any module are copied into `logger`'s buffer.
/// With `file_enabled`, every record at debug level and above is also appended
/// to [`Logger::get_log_file_path`]. Returns the log file path when one is used.
pub fn init_logging(logger: &Logger, file_enabled: bool) -> Result<Option<PathBuf>> {
    let buffer = logger.clone();
    let memory = fern::Dispatch::new()
        .level(log::LevelFilter::Warn)
        .filter(|metadata| metadata.target() != UI_LOG_TARGET)
        .chain(fern::Output::call(move |record| {
            buffer.push(format!("{} {}", record.level(), record.args()));
        }));

    let mut dispatch = fern::Dispatch::new().level(log::LevelFilter::Debug).chain(memory);

    let mut log_path = None;
    if file_enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
        log_path = Some(path);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(log_path)
}
