//! Logging backend for filepick
//!
//! Installs a process-wide `log` backend that writes one timestamped line per
//! record to stderr. Nothing is written to disk and no environment variables
//! are consulted.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Mutex;

/// Minimum level for the current build profile
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Stderr logger
pub struct FilePickLogger {
    min_level: LevelFilter,
    // One writer at a time; lines stay whole
    sink: Mutex<std::io::Stderr>,
}

impl FilePickLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level,
            sink: Mutex::new(std::io::stderr()),
        }
    }
}

/// Render a single log line (without trailing newline)
pub fn format_entry(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{:5}] [{}] {}", timestamp, level, target, message)
}

impl Log for FilePickLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let entry = format_entry(
            &timestamp,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", entry);
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Initialize the global logger at the build's default level
pub fn init() -> crate::Result<()> {
    init_with_level(default_level())
}

/// Initialize the global logger with an explicit minimum level
pub fn init_with_level(min_level: LevelFilter) -> crate::Result<()> {
    log::set_boxed_logger(Box::new(FilePickLogger::new(min_level)))?;
    log::set_max_level(min_level);
    Ok(())
}
