use crate::error::{BmtreeError, Result};
use crate::operations::FolderFilter;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder titles removed when no `--remove` is given
    #[serde(default)]
    pub remove: Vec<String>,

    /// Folder titles picked when no `--pick` is given
    #[serde(default)]
    pub pick: Vec<String>,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Worker threads used when converting several files
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove: Vec::new(),
            pick: Vec::new(),
            pretty: default_pretty(),
            jobs: default_jobs(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_jobs() -> usize {
    1
}

impl Config {
    /// Default location (~/.config/bmtree/config.yml)
    pub fn default_path() -> PathBuf {
        crate::utils::get_config_dir().join("config.yml")
    }

    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| BmtreeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location
    /// Falls back to default config if the file doesn't exist or can't be loaded
    pub fn load() -> Self {
        let config_path = Self::default_path();

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {}: {}; using default configuration",
                        config_path.display(),
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let write_error = |source: std::io::Error| BmtreeError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(path, self.to_yaml()?).map_err(write_error)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::default_path())
    }

    fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(BmtreeError::Config("jobs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Folder filter from explicit names, falling back to the configured ones
    /// for each mode left empty
    pub fn folder_filter(&self, remove: &[String], pick: &[String]) -> FolderFilter {
        let remove = if remove.is_empty() {
            self.remove.as_slice()
        } else {
            remove
        };
        let pick = if pick.is_empty() {
            self.pick.as_slice()
        } else {
            pick
        };
        FolderFilter::new(remove.iter().cloned(), pick.iter().cloned())
    }
}
