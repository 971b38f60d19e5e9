//! CLI configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};
use trackfield_core::ResultKind;

use crate::cli::ExportFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kind used when `--kind` is omitted
    pub default_kind: Option<ResultKind>,
    /// Format used when `export --format` is omitted
    pub export_format: ExportFormat,
}

impl Config {
    /// `<config dir>/trackfield/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trackfield").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load the explicit or default config file, falling back to defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        if explicit.is_none() && !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Resolve the kind for a command: the explicit tag wins, then the
    /// configured default, otherwise the codec's missing-kind error.
    pub fn resolve_kind(&self, tag: Option<&str>) -> trackfield_core::Result<ResultKind> {
        match (tag, self.default_kind) {
            (Some(tag), _) => ResultKind::resolve(Some(tag)),
            (None, Some(kind)) => Ok(kind),
            (None, None) => ResultKind::resolve(None),
        }
    }

    /// Tag handed to the never-failing mask
    pub fn kind_tag<'a>(&self, tag: Option<&'a str>) -> Option<&'a str> {
        tag.or_else(|| self.default_kind.map(|kind| kind.tag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_kind = \"DISTANCE\"").unwrap();
        writeln!(file, "export_format = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.default_kind, Some(ResultKind::Distance));
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_kind_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_kind = \"HEIGHT\"").unwrap();
        assert!(Config::load(file.path()).is_err());
        assert_eq!(Config::load_or_default(Some(file.path())), Config::default());
    }

    #[test]
    fn test_load_or_default_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(Some(dir.path().join("missing.toml").as_path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_kind() {
        let config = Config {
            default_kind: Some(ResultKind::Points),
            ..Default::default()
        };
        assert_eq!(config.resolve_kind(Some("TIME")).unwrap(), ResultKind::Time);
        assert_eq!(config.resolve_kind(None).unwrap(), ResultKind::Points);
        assert!(config.resolve_kind(Some("999")).unwrap_err().is_invalid_kind());

        let bare = Config::default();
        assert!(bare.resolve_kind(None).unwrap_err().is_invalid_kind());
    }

    #[test]
    fn test_kind_tag() {
        let config = Config {
            default_kind: Some(ResultKind::Time),
            ..Default::default()
        };
        assert_eq!(config.kind_tag(None), Some("TIME"));
        assert_eq!(config.kind_tag(Some("x")), Some("x"));
        assert_eq!(Config::default().kind_tag(None), None);
    }
}
