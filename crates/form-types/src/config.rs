use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

fn default_true() -> bool {
    true
}

/// Behaviour switches for [`crate::DetailsField`].
///
/// Every field defaults to `true` so a missing or partial config file
/// keeps the documented behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailsConfig {
    /// Wrap plain-text summaries in `<strong>`.
    #[serde(default = "default_true")]
    pub auto_strong: bool,
    /// Open the element when any direct child carries a message.
    #[serde(default = "default_true")]
    pub open_when_child_message: bool,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            auto_strong: true,
            open_when_child_message: true,
        }
    }
}

/// Top-level forms config file structure.
///
/// ```toml
/// [details]
/// auto_strong = false
/// open_when_child_message = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormsConfig {
    #[serde(default)]
    pub details: DetailsConfig,
}

impl FormsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            auto_strong = config.details.auto_strong,
            open_when_child_message = config.details.open_when_child_message,
            "Loaded forms config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_flags_all_true() {
        let config = DetailsConfig::default();
        assert!(config.auto_strong);
        assert!(config.open_when_child_message);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = FormsConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn partial_toml_defaults_missing_fields() {
        let config = FormsConfig::from_toml_str(
            r#"
            [details]
            auto_strong = false
            "#,
        )
        .unwrap();
        assert!(!config.details.auto_strong);
        assert!(config.details.open_when_child_message);
    }

    #[test]
    fn full_toml() {
        let config = FormsConfig::from_toml_str(
            r#"
            [details]
            auto_strong = false
            open_when_child_message = false
            "#,
        )
        .unwrap();
        assert!(!config.details.auto_strong);
        assert!(!config.details.open_when_child_message);
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = FormsConfig::from_toml_str(
            r#"
            [details]
            auto_strong = "yes"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FormsConfig::load("/nonexistent/forms.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[details]\nopen_when_child_message = false").unwrap();

        let config = FormsConfig::load(file.path()).unwrap();
        assert!(config.details.auto_strong);
        assert!(!config.details.open_when_child_message);
    }

    #[test]
    fn load_from_dir_reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forms.toml");
        std::fs::write(&path, "[details]\nauto_strong = false\n").unwrap();

        let config = FormsConfig::load(&path).unwrap();
        assert!(!config.details.auto_strong);
        assert!(config.details.open_when_child_message);
    }

    #[test]
    fn json_with_missing_fields_defaults() {
        let config: DetailsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DetailsConfig::default());
    }
}
