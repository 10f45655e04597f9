//! Configuration file support for sysml-deps.
//!
//! Provides YAML-based configuration through `sysml-deps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::adapters::outbound::formatters::GraphvizFormatter;
use crate::shared::error::ModelError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sysml-deps.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub extension: Option<String>,
    pub ignore_missing: Option<Vec<String>>,
    pub strict_missing: Option<bool>,
    pub graph_layout: Option<String>,
    pub write_graph: Option<bool>,
    pub write_notebook: Option<bool>,
    /// Only read by `order`; `run` always writes dependencies first so the
    /// notebook executes top to bottom.
    pub dependencies_first: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null; treat it as "no settings"
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "configuration loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Checks an extension given in config or on the command line.
pub fn validate_extension(extension: &str) -> std::result::Result<(), ModelError> {
    if extension.trim().is_empty() {
        return Err(ModelError::Validation {
            message: "extension must not be empty.\n\n💡 Hint: Use a bare extension such as \"sysml\".".to_string(),
        });
    }
    if extension.starts_with('.') {
        return Err(ModelError::Validation {
            message: format!(
                "extension must not start with a dot: '{}'.\n\n💡 Hint: Write \"{}\" instead.",
                extension,
                extension.trim_start_matches('.')
            ),
        });
    }
    Ok(())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref extension) = config.extension {
        validate_extension(extension)?;
    }

    if let Some(ref names) = config.ignore_missing {
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ModelError::Validation {
                    message: format!(
                        "Invalid config: ignore_missing[{}] must not be empty.\n\n\
                         💡 Hint: List package names such as \"ScalarValues\".",
                        i
                    ),
                }
                .into());
            }
        }
    }

    if let Some(ref layout) = config.graph_layout {
        GraphvizFormatter::engine_for(layout)?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field");
        eprintln!(
            "{}",
            format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key).yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
extension: kerml
ignore_missing:
  - "<root>"
  - ScalarValues
strict_missing: true
graph_layout: shell
write_graph: false
write_notebook: false
dependencies_first: false
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.extension.as_deref(), Some("kerml"));
        assert_eq!(
            config.ignore_missing.as_deref(),
            Some(&["<root>".to_string(), "ScalarValues".to_string()][..])
        );
        assert_eq!(config.strict_missing, Some(true));
        assert_eq!(config.graph_layout.as_deref(), Some("shell"));
        assert_eq!(config.write_graph, Some(false));
        assert_eq!(config.write_notebook, Some(false));
        assert_eq!(config.dependencies_first, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "strict_missing: true\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.strict_missing, Some(true));
        assert!(config.extension.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.extension.is_none());
    }

    #[test]
    fn test_extension_with_leading_dot_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "extension: .sysml\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("must not start with a dot"));
        assert!(message.contains("\"sysml\""));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "extension: \"\"\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("extension must not be empty"));
    }

    #[test]
    fn test_whitespace_ignore_missing_entry_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "ignore_missing:\n  - ISQ\n  - \"   \"\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("ignore_missing[1] must not be empty"));
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "graph_layout: circular\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Unknown layout: circular"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "extension: sysml\nexecute: true\nviews_dir: out\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("execute"));
        assert!(config.unknown_fields.contains_key("views_dir"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.extension.is_none());
        assert!(config.ignore_missing.is_none());
        assert!(config.strict_missing.is_none());
        assert!(config.graph_layout.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
