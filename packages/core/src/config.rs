//! Viewer configuration
//!
//! Read from a JSON file named by `FOLIO_CONFIG`. Every field has a default,
//! so a partial file (or no file at all) is valid.

use crate::{ArticleState, FolioError, FolioResult, Selection, Slot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub window: WindowConfig,
    /// `tracing` filter directives; `RUST_LOG` wins when set
    pub log_filter: String,
    /// Article to display; the bundled sample is used when unset
    pub article_path: Option<PathBuf>,
    /// Snapshot restored by the panel's reset action
    pub defaults: ArticleState,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "info,folio=debug".to_string(),
            article_path: None,
            defaults: ArticleState::default(),
        }
    }
}

impl FolioConfig {
    /// Load from `FOLIO_CONFIG`, or defaults if it is not set
    pub fn load() -> FolioResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => {
                debug!("{} not set, using default config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file(path: &Path) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        if let Some(defaults) = value.get("defaults") {
            check_catalog_values(defaults)?;
        }
        let config: FolioConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> FolioResult<()> {
        let w = &self.window;
        if w.width <= 0.0 || w.height <= 0.0 {
            return Err(FolioError::Config(format!(
                "window size must be positive, got {}x{}",
                w.width, w.height
            )));
        }
        if w.min_width > w.width || w.min_height > w.height {
            return Err(FolioError::Config(format!(
                "minimum window size {}x{} exceeds window size {}x{}",
                w.min_width, w.min_height, w.width, w.height
            )));
        }
        Ok(())
    }
}

/// Report out-of-catalog option values as `UnknownOption` rather than a
/// generic deserialization error
fn check_catalog_values(defaults: &Value) -> FolioResult<()> {
    for slot in Slot::ALL {
        if let Some(raw) = defaults.get(slot.key()).and_then(Value::as_str) {
            Selection::parse(slot, raw)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackgroundColor, FontFamily};
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FolioConfig::from_json("{}").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_partial_defaults_override() {
        let config = FolioConfig::from_json(
            r##"{
                "log_filter": "warn",
                "defaults": {
                    "fontFamilyOption": "Ubuntu",
                    "fontSizeOption": "25px",
                    "fontColor": "#000000",
                    "backgroundColor": "#C4C4C4",
                    "contentWidth": "948px"
                }
            }"##,
        )
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.defaults.font_family, FontFamily::Ubuntu);
        assert_eq!(config.defaults.background_color, BackgroundColor::Gray);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_out_of_catalog_default_rejected() {
        let err = FolioConfig::from_json(r#"{"defaults": {"fontSizeOption": "99px"}}"#)
            .unwrap_err();
        match err {
            FolioError::UnknownOption { slot, value } => {
                assert_eq!(slot, Slot::FontSize);
                assert_eq!(value, "99px");
            }
            other => panic!("expected UnknownOption, got {:?}", other),
        }
    }

    #[test]
    fn test_wrongly_typed_default_is_serialization_error() {
        let err = FolioConfig::from_json(r#"{"defaults": {"contentWidth": 948}}"#).unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn test_invalid_window_rejected() {
        let err = FolioConfig::from_json(r#"{"window": {"width": 640, "min_width": 800}}"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"article_path": "/tmp/article.txt"}}"#).unwrap();

        let config = FolioConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.article_path, Some(PathBuf::from("/tmp/article.txt")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::load_from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
