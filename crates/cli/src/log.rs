//! Log messages go to stderr and into a bounded history in the data directory, which the `log`
//! command prints.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use fitplan_storage::file_system::{FileStorage, Key};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Length of the message history. Older entries are dropped.
pub const CAPACITY: usize = 100;

static HISTORY: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Store of recent log entries.
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("log history unavailable: {0}")]
    Storage(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelKey")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelKey {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Repository for FileStorage {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.get_or_default(Key::Log)
            .map_err(|err| Error::Storage(err.to_string()))
    }

    /// Entries are kept newest first.
    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(CAPACITY);
        self.set(Key::Log, &entries)
            .map_err(|err| Error::Storage(err.to_string()))
    }
}

static LOGGER: Logger = Logger;

/// Install the global logger. Messages above `level` are discarded.
///
/// # Errors
///
/// Fails if a global logger is already installed.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut history) = HISTORY.lock() {
        *history = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };
        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);

        if let Ok(history) = HISTORY.lock() {
            if let Some(repository) = history.as_ref() {
                if let Ok(repository) = repository.lock() {
                    let _ = repository.write_entry(entry);
                }
            }
        }
    }

    fn flush(&self) {}
}
