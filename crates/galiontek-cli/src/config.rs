//! CLI configuration.
//!
//! All settings live in a single `config.toml` at
//! `~/.config/galiontek/config.toml` by default. Command-line flags override
//! the file; the file only supplies defaults.

use std::path::{Path, PathBuf};

use galiontek_core::units::UnitMode;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for the galiontek CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Count in 45-minute teaching units by default.
    pub use_45_minute_units: bool,

    /// Location of the JSON data file.
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    /// The default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("galiontek")
            .join("config.toml")
    }

    /// Loads the config from the default location, if it exists.
    ///
    /// An unreadable or unparseable file falls back to defaults, but the
    /// reason is logged rather than swallowed.
    pub fn load() -> Option<Self> {
        let path = Self::default_path();
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(reason) => {
                warn!(%reason, "ignoring invalid config file");
                None
            }
        }
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        toml::from_str(&text).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
    }

    /// The data file to use: configured path, or the platform data dir.
    pub fn data_file_path(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("galiontek")
                .join("data.json")
        })
    }

    /// Resolves the unit mode from the config default and a per-invocation flag.
    pub fn unit_mode(&self, teaching_units_flag: bool) -> UnitMode {
        UnitMode::from_teaching_flag(teaching_units_flag || self.use_45_minute_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(!config.use_45_minute_units);
        assert!(config.data_file.is_none());
        assert_eq!(config.unit_mode(false), UnitMode::AcademicHour);
        assert_eq!(config.unit_mode(true), UnitMode::TeachingUnit);
    }

    #[test]
    fn partial_file_parses_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "use_45_minute_units = true").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(config.use_45_minute_units);
        assert!(config.data_file.is_none());
        assert_eq!(config.unit_mode(false), UnitMode::TeachingUnit);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "use_45_minute_units = \"not a bool\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.contains("failed to parse"));
    }

    #[test]
    fn missing_file_errors() {
        let err = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.contains("failed to read"));
    }
}
