//! Lookup cache
//!
//! Maps a lowercase word to the entries fetched for it. Records are never
//! evicted or expired, and negative results are stored like any other.
//! Implementations use interior mutability so a single
//! `Arc<dyn LookupCache>` can be shared by the lookup worker and the editor.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::entry::DictionaryEntry;

type Records = BTreeMap<String, Vec<DictionaryEntry>>;

/// Key-value store for lookup results. Keys are expected lowercase.
pub trait LookupCache: Send + Sync {
    /// Returns the stored entries, or `None` when the key was never stored.
    fn get(&self, key: &str) -> Option<Vec<DictionaryEntry>>;

    /// Stores `value` under `key`, replacing any existing record.
    fn update(&self, key: &str, value: Vec<DictionaryEntry>);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic while holding the lock cannot leave a half-written record
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Process-lifetime cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: Mutex<Records>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LookupCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<DictionaryEntry>> {
        lock(&self.records).get(key).cloned()
    }

    fn update(&self, key: &str, value: Vec<DictionaryEntry>) {
        lock(&self.records).insert(key.to_string(), value);
    }
}

/// Cache persisted as a JSON object in a single file.
///
/// The file is read once at open and rewritten on every update. No file
/// locking: last writer wins if multiple instances run simultaneously.
///
/// The records lock is only held while the map is serialized; the disk
/// write happens under a separate lock so readers never wait on I/O.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    records: Mutex<Records>,
    write_lock: Mutex<()>,
    warning: Option<String>,
}

impl FileCache {
    /// Opens the cache at `path`. A missing file starts empty; an unreadable
    /// or corrupt one also starts empty and records a warning.
    pub fn open(path: PathBuf) -> Self {
        let (records, warning) = match load_records(&path) {
            Ok(records) => (records, None),
            Err(e) => {
                log::warn!("Ignoring unreadable cache {:?}: {}", path, e);
                (Records::new(), Some(format!("Cache reset: {}", e)))
            }
        };

        log::debug!("Opened cache {:?} with {} records", path, records.len());

        Self {
            path,
            records: Mutex::new(records),
            write_lock: Mutex::new(()),
            warning,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Problem encountered while opening, if any
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LookupCache for FileCache {
    fn get(&self, key: &str) -> Option<Vec<DictionaryEntry>> {
        lock(&self.records).get(key).cloned()
    }

    fn update(&self, key: &str, value: Vec<DictionaryEntry>) {
        // Writers queue here so an older snapshot never lands after a newer one
        let _writing = lock(&self.write_lock);

        let content = {
            let mut records = lock(&self.records);
            records.insert(key.to_string(), value);
            serde_json::to_string_pretty(&*records)
        };

        // The in-memory record stays even when the file cannot be written
        let result = content
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .and_then(|content| write_records(&self.path, &content));
        if let Err(e) = result {
            log::error!("Failed to write cache {:?}: {}", self.path, e);
        }
    }
}

fn load_records(path: &Path) -> io::Result<Records> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Records::new()),
        Err(e) => return Err(e),
    };

    if contents.trim().is_empty() {
        return Ok(Records::new());
    }

    serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_records(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
