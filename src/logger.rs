//! Logging utilities.
//!
//! The toolkit logs through the standard [`log`] facade. [`init`] installs a
//! [`fern`] dispatch that retains formatted records in a shared [`MemoryLog`]
//! so an application can inspect diagnostics later (for example through
//! [`Driver::show_log`](crate::driver::Driver::show_log)) without disturbing
//! the drawn screen, and can optionally also append to a file.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::LevelFilter;

/// Shared in-memory log sink.
///
/// Clones share the same backing storage, so the copy handed to [`init`] and
/// the copy kept by the application observe the same entries.
#[derive(Clone)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a formatted entry.
    pub fn record(&self, level: log::Level, message: &str) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let formatted = format!("[{timestamp}] {level:<5} {message}");

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(formatted);
        }
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all retained entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global logger: every record at or above `level` is retained in
/// `memory`, and appended to `file` when one is given.
///
/// May only be called once per process; subsequent calls return an error from
/// the `log` facade.
pub fn init(memory: MemoryLog, level: LevelFilter, file: Option<PathBuf>) -> Result<(), fern::InitError> {
    let sink = memory.clone();
    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(fern::Output::call(move |record: &log::Record| {
            sink.record(record.level(), &record.args().to_string());
        }));

    if let Some(path) = file {
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{}] {:<5} {}",
                        Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        message
                    ))
                })
                .chain(fern::log_file(path)?),
        );
    }

    dispatch.apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_retains_formatted_entries() {
        let log = MemoryLog::new();
        log.record(log::Level::Info, "frame complete");
        log.record(log::Level::Debug, "focus moved");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("INFO"));
        assert!(entries[0].contains("frame complete"));
        assert!(entries[1].contains("focus moved"));
    }

    #[test]
    fn clones_share_storage() {
        let log = MemoryLog::new();
        let clone = log.clone();
        clone.record(log::Level::Warn, "resize during draw");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn clear_empties_the_sink() {
        let log = MemoryLog::new();
        log.record(log::Level::Info, "x");
        log.clear();
        assert!(log.is_empty());
    }
}
