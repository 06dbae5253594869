use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Published articles shown per page when the config file does not say.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid page_size in {config_path}: must be at least 1")]
    InvalidPageSize { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the stored article collection.
    pub data_path: PathBuf,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Config {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                config_path: config_path.to_path_buf(),
            });
        }

        // Expand shell variables and tilde in the data directory
        config.data_path = Self::expand_path(&config.data_path).unwrap_or(config.data_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/quillpad");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Data directory used when neither the command line nor a config file
    /// names one.
    pub fn default_data_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.local/share/quillpad").as_ref())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, content).unwrap();
        config_file
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/quillpad/config.toml"));
    }

    #[test]
    fn test_default_data_path_is_expanded() {
        let data_path = Config::default_data_path();

        assert!(!data_path.to_string_lossy().starts_with('~'));
        assert!(data_path.ends_with(".local/share/quillpad"));
    }

    #[test]
    fn test_page_size_defaults_when_missing() {
        let config: Config = toml::from_str(r#"data_path = "/srv/articles""#).unwrap();

        assert_eq!(config, Config::new("/srv/articles"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_expand_path_with_unknown_variable() {
        let path = PathBuf::from("$QUILLPAD_SURELY_UNSET_VAR/articles");

        assert_eq!(Config::expand_path(&path), None);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            data_path: PathBuf::from("/tmp/test-articles"),
            page_size: 12,
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_expands_env_var() {
        unsafe {
            env::set_var("QUILLPAD_TEST_ROOT", "/custom/data");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, r#"data_path = "$QUILLPAD_TEST_ROOT/blog""#);
        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.data_path, PathBuf::from("/custom/data/blog"));

        unsafe {
            env::remove_var("QUILLPAD_TEST_ROOT");
        }
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "data_path = \"/tmp\"\npage_size = 0\n");

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::InvalidPageSize { .. })));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "page_size = \"many\"\n");

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
