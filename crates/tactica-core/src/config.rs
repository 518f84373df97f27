use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TacticaError;

/// Top-level Tactica configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tactica: TacticaConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticaConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TacticaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where the editable dictionary lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_dictionary_path")]
    pub path: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
        }
    }
}

/// Column names in statement tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Shown next to each statement in reports; optional in the data.
    #[serde(default = "default_id_column")]
    pub id_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text_column: default_text_column(),
            id_column: default_id_column(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_dictionary_path() -> String {
    "dictionary.toml".to_string()
}
fn default_text_column() -> String {
    "Statement".to_string()
}
fn default_id_column() -> String {
    "ID".to_string()
}
fn default_output_path() -> String {
    "classified_data.csv".to_string()
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, TacticaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| TacticaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| TacticaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.tactica.log_level, "info");
        assert_eq!(cfg.dictionary.path, "dictionary.toml");
        assert_eq!(cfg.input.text_column, "Statement");
        assert_eq!(cfg.input.id_column, "ID");
        assert_eq!(cfg.output.path, "classified_data.csv");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
            [input]
            text_column = "Text"
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.input.text_column, "Text");
        assert_eq!(cfg.input.id_column, "ID");
        assert_eq!(cfg.dictionary.path, "dictionary.toml");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.output.path, "classified_data.csv");
        assert_eq!(cfg.tactica.log_level, "info");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = load("/nonexistent/__tactica_config__.toml").unwrap();
        assert_eq!(cfg.input.text_column, "Statement");
    }

    #[test]
    fn test_load_invalid_file() {
        let tmp = std::env::temp_dir().join(format!(
            "__tactica_test_bad_config_{}__.toml",
            std::process::id()
        ));
        std::fs::write(&tmp, "[input\ntext_column = 1").unwrap();
        let err = load(tmp.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, TacticaError::Config(_)));
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn test_shellexpand() {
        assert_eq!(shellexpand("/abs/path"), "/abs/path");
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                shellexpand("~/dict.toml"),
                format!("{}/dict.toml", home.to_string_lossy())
            );
        }
    }
}
