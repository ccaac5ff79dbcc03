use mdtree_engine::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the config file, before `~` expansion.
pub const CONFIG_DIR: &str = "~/.config/mdtree";
pub const CONFIG_FILE: &str = "config.toml";

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
}

/// On-disk settings. Every table is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config =
            Self::from_toml_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Loads the user's config, if one has been written.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.parse)?;
        std::fs::write(config_path, format!("[parse]\n{content}"))?;
        log::debug!("saved parse options to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `CONFIG_FILE` inside the expanded `CONFIG_DIR`.
    pub fn config_path() -> PathBuf {
        let dir = shellexpand::tilde(CONFIG_DIR);
        Path::new(dir.as_ref()).join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtree_engine::QuoteJoin;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/mdtree/config.toml"));
        assert_eq!(config_path.file_name().unwrap(), CONFIG_FILE);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parse, ParseOptions::default());
    }

    #[test]
    fn test_partial_parse_table() {
        let config_content = r#"
[parse]
quote_join = "space"
"#;

        let config = Config::from_toml_str(config_content).unwrap();

        assert_eq!(config.parse.quote_join, QuoteJoin::Space);
        assert!(!config.parse.escape_html);
        assert!(config.parse.code_language_class);
    }

    #[test]
    fn test_full_parse_table() {
        let config_content = r#"
[parse]
quote_join = "newline"
escape_html = true
code_language_class = false
"#;

        let config = Config::from_toml_str(config_content).unwrap();

        assert_eq!(
            config.parse,
            ParseOptions {
                quote_join: QuoteJoin::Newline,
                escape_html: true,
                code_language_class: false,
            }
        );
    }

    #[test]
    fn test_unknown_quote_join_is_rejected() {
        let config_content = r#"
[parse]
quote_join = "tab"
"#;

        assert!(Config::from_toml_str(config_content).is_err());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parse\nescape_html = true").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        let ConfigError::ConfigParseError { config_path, .. } = &err else {
            panic!("expected parse error, got {err:?}");
        };
        assert_eq!(config_path, &config_file);
        let message = err.to_string();
        assert!(message.starts_with("Failed to parse config file at"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = Config {
            parse: ParseOptions {
                quote_join: QuoteJoin::Space,
                escape_html: true,
                code_language_class: true,
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config, test_config);

        let written = std::fs::read_to_string(&config_file).unwrap();
        assert!(written.starts_with("[parse]\n"));
        assert!(written.contains("quote_join = \"space\""));
    }

    #[test]
    fn test_loaded_options_drive_rendering() {
        let config = Config::from_toml_str("[parse]\nescape_html = true").unwrap();
        let html = mdtree_engine::markdown_to_html("a & b", &config.parse).unwrap();
        assert_eq!(html, "<div><p>a &amp; b</p></div>");
    }
}
