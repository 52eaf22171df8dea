use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::result::CommonResult;

/// Durable key-value storage abstraction.
///
/// Snapshot persistence goes through this trait so the state core never
/// touches the filesystem directly. Production code uses [`DiskStore`];
/// tests use [`MemoryStore`].
pub trait KeyValueStore {
    /// Read the payload stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Write `payload` under `key`, replacing any previous value
    fn write(&mut self, key: &str, payload: &str) -> CommonResult<()>;

    /// Remove the entry under `key` (absent keys are fine)
    fn remove(&mut self, key: &str) -> CommonResult<()>;

    /// List all stored keys
    fn keys(&self) -> Vec<String>;
}

/// Disk-backed store: one JSON document per key under a root directory
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Keys become file names; anything outside a conservative character set is
/// replaced so a hostile key cannot escape the root directory.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect()
}

impl KeyValueStore for DiskStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&mut self, key: &str, payload: &str) -> CommonResult<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.entry_path(key), payload)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CommonResult<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };
        entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy().into_owned();
                name.strip_suffix(".json").map(str::to_string)
            })
            .collect()
    }
}

/// In-memory store for testing
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, payload: &str) -> CommonResult<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CommonResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
