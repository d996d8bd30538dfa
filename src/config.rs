//! User configuration loaded from `config.toml`.

use crate::error::{Error, Result};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of history entries kept.
    pub history_limit: usize,
    /// Theme used when none has been saved yet.
    pub default_theme: Theme,
    /// Override for the storage file location.
    pub storage_path: Option<PathBuf>,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_theme: Theme::default(),
            storage_path: None,
            color: true,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse { path, source })
    }

    /// `<config dir>/keycalc/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::NoDataDir("config"))?;
        Ok(config_dir.join("keycalc").join("config.toml"))
    }

    /// Storage location: the configured override or the platform default.
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => crate::storage::FileStorage::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_limit = 3\ndefault_theme = \"blue\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.default_theme, Theme::Blue);
        assert!(config.color);
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn test_huge_history_limit_starts_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_limit = 9223372036854775807\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.history_limit, 9223372036854775807);

        let mut session =
            crate::session::Session::new(crate::storage::MemoryStorage::new(), &config);
        session.dispatch(crate::input::Input::Digit('5')).unwrap();
        session.dispatch(crate::input::Input::Operator('+')).unwrap();
        session.dispatch(crate::input::Input::Digit('3')).unwrap();
        session.dispatch(crate::input::Input::Equals).unwrap();
        assert_eq!(session.history().get(0), Some("5 + 3 = 8"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_limit = \"many\"").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_storage_override() {
        let config = Config {
            storage_path: Some(PathBuf::from("/tmp/keycalc.json")),
            ..Config::default()
        };
        assert_eq!(
            config.storage_path().unwrap(),
            PathBuf::from("/tmp/keycalc.json")
        );
    }
}
