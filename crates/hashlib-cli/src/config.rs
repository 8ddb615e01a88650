//! # Configuration
//!
//! Optional YAML file passed with `--config`. It supplies defaults only;
//! explicit command-line flags always win.
//!
//! ```yaml
//! default_encoding: UTF-16BE
//! format: tagged
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use hashlib_core::TextEncoding;

use crate::output::OutputFormat;

/// Contents of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Encoding used for text input when `--encoding` is absent.
    #[serde(default)]
    pub default_encoding: Option<TextEncoding>,
    /// Output format used when `--format` is absent.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Parse configuration YAML. An empty document yields the defaults.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Effective settings after merging flags, config file, and built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Encoding for text input.
    pub encoding: TextEncoding,
    /// Output format.
    pub format: OutputFormat,
}

impl Settings {
    /// Merge with precedence: flag, then config file, then default.
    pub fn resolve(config: &CliConfig, format_flag: Option<OutputFormat>) -> Self {
        Self {
            encoding: config.default_encoding.unwrap_or_default(),
            format: format_flag.or(config.format).unwrap_or_default(),
        }
    }

    /// Encoding for one command, honouring its own `--encoding` flag.
    pub fn encoding_for(&self, flag: Option<TextEncoding>) -> TextEncoding {
        flag.unwrap_or(self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::parse("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let config = CliConfig::parse("default_encoding: utf-16be\nformat: json\n").unwrap();
        assert_eq!(config.default_encoding, Some(TextEncoding::Utf16Be));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(CliConfig::parse("colour: blue\n").is_err());
    }

    #[test]
    fn unsupported_encoding_rejected() {
        let err = CliConfig::parse("default_encoding: EBCDIC\n").unwrap_err();
        assert!(format!("{err:#}").contains("EBCDIC"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashlib.yaml");
        std::fs::write(&path, "format: tagged\n").unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Tagged));
        assert_eq!(config.default_encoding, None);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn flag_beats_config_beats_default() {
        let config = CliConfig {
            default_encoding: Some(TextEncoding::Latin1),
            format: Some(OutputFormat::Tagged),
        };
        let settings = Settings::resolve(&config, Some(OutputFormat::Json));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.encoding, TextEncoding::Latin1);
        assert_eq!(settings.encoding_for(Some(TextEncoding::Utf16Be)), TextEncoding::Utf16Be);
        assert_eq!(settings.encoding_for(None), TextEncoding::Latin1);

        let defaults = Settings::resolve(&CliConfig::default(), None);
        assert_eq!(defaults.format, OutputFormat::Plain);
        assert_eq!(defaults.encoding, TextEncoding::Utf8);
    }
}
