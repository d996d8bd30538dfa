//! String key/value persistence for history and theme.
//!
//! Values are opaque strings keyed by name. History is stored as a JSON
//! array under [`HISTORY_KEY`], the theme as its lowercase name under
//! [`THEME_KEY`].

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const HISTORY_KEY: &str = "calcHistory";
pub const THEME_KEY: &str = "theme";

/// A persistent string store.
pub trait Storage {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage backed by a single JSON object on disk.
///
/// The whole file is rewritten on every `set`: a sibling `.tmp` file is
/// written first, then renamed over the store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(Error::io(&path, e)),
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "opened storage");
        Ok(Self { path, values })
    }

    /// Default location: `<data dir>/keycalc/storage.json`.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or(Error::NoDataDir("data"))?;
        Ok(data_dir.join("keycalc").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&self.values).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, content).map_err(|e| Error::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| Error::io(&self.path, e))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "storage.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()?;
        tracing::info!(key, path = %self.path.display(), "saved");
        Ok(())
    }
}

/// In-memory storage; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
