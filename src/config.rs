/// Application configuration
///
/// Read from `config.json` in the user's config directory when present:
/// - Linux: ~/.config/nature-gallery/config.json
/// - macOS: ~/Library/Application Support/nature-gallery/config.json
/// - Windows: %APPDATA%\nature-gallery\config.json
///
/// Environment variables override the file.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unsplash caps `per_page` at 30
const MAX_PER_PAGE: u32 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Unsplash API, with trailing slash
    pub api_base_url: String,
    /// Unsplash access key, sent as `client_id`
    pub access_key: String,
    pub query: String,
    pub orientation: String,
    pub per_page: u32,
    /// Value of the `Accept-Version` header
    pub api_version: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.unsplash.com/".to_string(),
            access_key: String::new(),
            query: "nature".to_string(),
            orientation: "portrait".to_string(),
            per_page: 20,
            api_version: "v1".to_string(),
            window_width: 420.0,
            window_height: 860.0,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("nature-gallery");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config.normalized())
    }

    /// Apply overrides from a variable lookup (the process environment in practice)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("UNSPLASH_API_URL").filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(key) = lookup("UNSPLASH_ACCESS_KEY").filter(|v| !v.trim().is_empty()) {
            self.access_key = key.trim().to_string();
        }
        if let Some(query) = lookup("GALLERY_QUERY").filter(|v| !v.trim().is_empty()) {
            self.query = query.trim().to_string();
        }

        *self = std::mem::take(self).normalized();
    }

    pub fn has_access_key(&self) -> bool {
        !self.access_key.is_empty()
    }

    fn normalized(mut self) -> Self {
        if !self.api_base_url.ends_with('/') {
            self.api_base_url.push('/');
        }
        self.per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.unsplash.com/");
        assert_eq!(config.query, "nature");
        assert_eq!(config.orientation, "portrait");
        assert_eq!(config.per_page, 20);
        assert!(!config.has_access_key());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "access_key": "abc123", "per_page": 99 }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.access_key, "abc123");
        assert_eq!(config.per_page, 30);
        assert_eq!(config.query, "nature");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("UNSPLASH_ACCESS_KEY", " key-from-env "),
            ("UNSPLASH_API_URL", "http://localhost:8080"),
            ("GALLERY_QUERY", ""),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.access_key, "key-from-env");
        assert_eq!(config.api_base_url, "http://localhost:8080/");
        assert_eq!(config.query, "nature");
    }
}
