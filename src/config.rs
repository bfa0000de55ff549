//! Configuration management and validation.
//!
//! Holds the college registry: which published sheet answers lookups for
//! which college. Configuration is layered: an explicit file, then the
//! default file under the user config directory if it exists, then the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COLLEGES, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::{PortalError, Result};

/// A college and the published CSV export holding its results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    /// Short key used by the lookup form, e.g. "college1"
    pub id: String,

    /// Display name printed on the marksheet
    pub name: String,

    /// Sheet location: an http(s) CSV export URL or a local file path
    pub csv_url: String,
}

impl College {
    pub fn new(id: impl Into<String>, name: impl Into<String>, csv_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            csv_url: csv_url.into(),
        }
    }
}

/// Global configuration for the result portal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Colleges in the order they are offered
    pub colleges: Vec<College>,

    /// Timeout for fetching remote sheets
    pub request_timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            colleges: DEFAULT_COLLEGES
                .iter()
                .map(|(id, name, url)| College::new(*id, *name, *url))
                .collect(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl PortalConfig {
    /// Create configuration with the built-in college registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the college registry
    pub fn with_colleges(mut self, colleges: Vec<College>) -> Self {
        self.colleges = colleges;
        self
    }

    /// Add one college to the registry
    pub fn with_college(mut self, college: College) -> Self {
        self.colleges.push(college);
        self
    }

    /// Set the remote fetch timeout
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Find a college by id
    pub fn college(&self, id: &str) -> Result<&College> {
        self.colleges
            .iter()
            .find(|college| college.id == id)
            .ok_or_else(|| PortalError::UnknownCollege { id: id.to_string() })
    }

    /// Check the registry is usable
    pub fn validate(&self) -> Result<()> {
        if self.colleges.is_empty() {
            return Err(PortalError::configuration("no colleges configured"));
        }

        let mut seen = HashSet::new();
        for college in &self.colleges {
            if college.id.trim().is_empty() {
                return Err(PortalError::configuration("college id must not be empty"));
            }
            if !seen.insert(college.id.as_str()) {
                return Err(PortalError::configuration(format!(
                    "duplicate college id '{}'",
                    college.id
                )));
            }
            if college.name.trim().is_empty() {
                return Err(PortalError::configuration(format!(
                    "college '{}' has no name",
                    college.id
                )));
            }
            if college.csv_url.trim().is_empty() {
                return Err(PortalError::configuration(format!(
                    "college '{}' has no csv_url",
                    college.id
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(PortalError::configuration(
                "request_timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Read configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PortalError::configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: PortalConfig = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} colleges from {}",
            config.colleges.len(),
            path.display()
        );
        Ok(config)
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| PortalError::configuration("could not determine user config directory"))
    }

    /// Load configuration using layered approach (explicit file -> default
    /// file -> built-in defaults) and validate it
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path().ok().filter(|path| path.exists()) {
                Some(path) => {
                    info!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                None => {
                    debug!("No config file found, using built-in college registry");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_registry() {
        let config = PortalConfig::default();
        assert_eq!(config.colleges.len(), 3);
        assert_eq!(config.college("college2").unwrap().name, "Greenwood High School");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_college() {
        let config = PortalConfig::default();
        assert!(matches!(
            config.college("college9"),
            Err(PortalError::UnknownCollege { .. })
        ));
    }

    #[test]
    fn test_validation_failures() {
        let empty = PortalConfig::new().with_colleges(vec![]);
        assert!(empty.validate().is_err());

        let duplicate = PortalConfig::new().with_college(College::new("college1", "Again", "a.csv"));
        assert!(duplicate.validate().is_err());

        let no_url = PortalConfig::new().with_college(College::new("college4", "Fourth", " "));
        assert!(no_url.validate().is_err());

        let no_timeout = PortalConfig::new().with_request_timeout(0);
        assert!(no_timeout.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = PortalConfig::new()
            .with_colleges(vec![College::new("local", "Local School", "results.csv")])
            .with_request_timeout(5);
        config.save(&path).unwrap();

        let loaded = PortalConfig::load_layered(Some(&path)).unwrap();
        assert_eq!(loaded.colleges, config.colleges);
        assert_eq!(loaded.request_timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "request_timeout_secs": 10 }"#).unwrap();

        let loaded = PortalConfig::from_file(&path).unwrap();
        assert_eq!(loaded.colleges.len(), 3);
        assert_eq!(loaded.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            PortalConfig::from_file(&path),
            Err(PortalError::Serialization(_))
        ));
    }
}
