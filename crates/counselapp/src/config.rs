//! # Configuration
//!
//! Settings are declared with [`confique`] and resolved in priority order:
//! 1. **Environment variables**: `COUNSEL_ID_FLOOR`, `COUNSEL_DEFAULT_COLLECTION`, etc.
//! 2. **Config file**: `counsel.toml`, either given explicitly or found in the OS config
//!    directory (via `directories`). A missing file is not an error.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `id_floor` | `100` | New counselor ids start above this value |
//! | `default_collection` | `students` | Collection shown when a session starts |
//! | `seed_mock_data` | `true` | Start with the bundled mock records |
//! | `log_filter` | `warn` | `tracing` filter directive used by the CLI |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Collection, RecordId};

pub const CONFIG_FILE_NAME: &str = "counsel.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CounselConfig {
    /// New counselor ids are always greater than this.
    #[config(default = 100, env = "COUNSEL_ID_FLOOR")]
    pub id_floor: RecordId,

    #[config(default = "students", env = "COUNSEL_DEFAULT_COLLECTION")]
    pub default_collection: String,

    #[config(default = true, env = "COUNSEL_SEED_MOCK_DATA")]
    pub seed_mock_data: bool,

    /// Filter directive, e.g. `warn` or `counselapp=debug`.
    #[config(default = "warn", env = "COUNSEL_LOG_FILTER")]
    pub log_filter: String,
}

impl Default for CounselConfig {
    fn default() -> Self {
        Self {
            id_floor: 100,
            default_collection: "students".to_string(),
            seed_mock_data: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl CounselConfig {
    /// Resolve env > file > defaults. `path` overrides the default file location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = path.map(Path::to_path_buf).or_else(default_config_path) {
            tracing::debug!(path = %file.display(), "loading config file");
            builder = builder.file(file);
        }
        let config = builder.load()?;
        config.collection()?;
        Ok(config)
    }

    /// Load only from `path` and defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::builder().file(path).load()?;
        config.collection()?;
        Ok(config)
    }

    pub fn collection(&self) -> Result<Collection> {
        self.default_collection.parse()
    }
}

/// `counsel.toml` inside the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "counsel").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CounselError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CounselConfig::default();
        assert_eq!(config.id_floor, 100);
        assert_eq!(config.collection().unwrap(), Collection::Students);
        assert!(config.seed_mock_data);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CounselConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, CounselConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "id_floor = 500\ndefault_collection = \"counselors\"\nseed_mock_data = false\n",
        )
        .unwrap();

        let config = CounselConfig::from_file(&path).unwrap();
        assert_eq!(config.id_floor, 500);
        assert_eq!(config.collection().unwrap(), Collection::Counselors);
        assert!(!config.seed_mock_data);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "default_collection = \"alumni\"\n").unwrap();
        assert!(matches!(
            CounselConfig::from_file(&path),
            Err(CounselError::UnknownValue(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "id_floor = \"lots\"\n").unwrap();
        assert!(matches!(
            CounselConfig::from_file(&path),
            Err(CounselError::Config(_))
        ));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
