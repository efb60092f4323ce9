//! Key-value store implementations for persisted feed state
//!
//! The feed manager owns exactly two logical keys (the job cache entry and
//! the monthly call counter). Both are stored as JSON strings through the
//! `KvStore` trait so tests can swap the filesystem for an in-memory map.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Minimal persisted key-value interface used by the feed manager.
///
/// Implementations must treat unreadable or missing values as absent keys;
/// the manager parses whatever comes back defensively, so a store never
/// needs to validate contents.
pub trait KvStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent/unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> std::io::Result<()>;

    /// Removes `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> std::io::Result<()>;
}

/// Filesystem-backed store keeping one JSON file per key
///
/// Files live in an XDG-compliant cache directory (`~/.cache/jobdeck/` on
/// Linux, or an equivalent platform path). The directory is created lazily
/// on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory where store files are kept
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the platform cache directory.
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "jobdeck")?;
        Some(Self {
            dir: project_dirs.cache_dir().to_path_buf(),
        })
    }

    /// Creates a store rooted at a custom directory, for tests or explicit
    /// cache locations.
    #[allow(dead_code)]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store for unit tests
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        if let Ok(mut map) = self.values.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        if let Ok(mut map) = self.values.lock() {
            map.remove(key);
        }
        Ok(())
    }
}
