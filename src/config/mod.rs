//! Viewer configuration — optional YAML file, defaults otherwise.
//!
//! ```yaml
//! indent_unit: 4
//! theme:
//!   opcode: "green"
//!   number: "#dddd00"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tui::theme::{Theme, ThemeConfig, ThemeError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Cells of left margin per chunk nesting level.
    pub indent_unit: u16,
    pub theme: ThemeConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            theme: ThemeConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(self.theme.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_path_gives_defaults() {
        let cfg = ViewerConfig::load(None).unwrap();
        assert_eq!(cfg.indent_unit, 2);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "indent_unit: 4").unwrap();
        let cfg = ViewerConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.indent_unit, 4);
        assert_eq!(cfg.theme.opcode, "green");
    }

    #[test]
    fn theme_overrides_parse() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme:\n  opcode: \"#00ff00\"").unwrap();
        let cfg = ViewerConfig::load(Some(file.path())).unwrap();
        assert!(cfg.theme().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ViewerConfig::load(Some(Path::new("/nonexistent/view.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_yaml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "indent_unit: [oops").unwrap();
        let err = ViewerConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_color_surfaces_as_theme_error() {
        let cfg = ViewerConfig {
            theme: ThemeConfig {
                register: "redish".into(),
                ..ThemeConfig::default()
            },
            ..ViewerConfig::default()
        };
        assert!(matches!(cfg.theme(), Err(ConfigError::Theme(_))));
    }
}
