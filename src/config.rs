use crate::indent::DEFAULT_INDENT_WIDTH;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Columns added or removed per indentation step.
    pub indent_width: usize,
    /// Write log output here instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Show the key hint on the bottom line when there is no message.
    pub show_hint: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            log_file: None,
            show_hint: true,
        }
    }
}

impl EditorConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/iclass/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("iclass").join("config.toml"))
    }

    /// Load from `explicit` if given, else from the default location when it
    /// exists, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.indent_width, 4);
        assert!(config.show_hint);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EditorConfig::from_toml("indent_width = 2").unwrap();
        assert_eq!(config.indent_width, 2);
        assert!(config.show_hint);
    }

    #[test]
    fn test_full_toml() {
        let config = EditorConfig::from_toml(
            "indent_width = 8\nlog_file = \"/tmp/iclass.log\"\nshow_hint = false\n",
        )
        .unwrap();
        assert_eq!(config.indent_width, 8);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/iclass.log")));
        assert!(!config.show_hint);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            EditorConfig::from_toml("indent_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = EditorConfig::load(Some(Path::new("/nonexistent/iclass.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "show_hint = false").unwrap();
        let config = EditorConfig::load(Some(file.path())).unwrap();
        assert!(!config.show_hint);
    }
}
