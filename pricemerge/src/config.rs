//! Application configuration management.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables. Nothing here affects how prices are merged,
//! only how the results are written out.

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::{io::Write, path::Path};

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// How results are rendered
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output rendering options
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print the JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Sort merged prices by group, then by span. Merge output is otherwise
    /// grouped in the order groups were first seen.
    #[serde(default)]
    pub sort: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            sort: false,
        }
    }
}

impl OutputConfig {
    /// Serialize `value` as JSON to `writer`, followed by a newline
    pub fn write<W: Write, T: Serialize>(&self, mut writer: W, value: &T) -> anyhow::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `PRICEMERGE_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Emit compact, sorted JSON
    /// export PRICEMERGE_OUTPUT__PRETTY=false
    /// export PRICEMERGE_OUTPUT__SORT=true
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(CliError::MissingConfig(path.to_path_buf()).into());
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("PRICEMERGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.output.pretty);
        assert!(!config.output.sort);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricemerge.toml");
        std::fs::write(&path, "[output]\nsort = true\n").unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert!(config.output.sort);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let error = AppConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::MissingConfig(_))
        ));
    }

    #[test]
    fn test_compact_output() {
        let output = OutputConfig {
            pretty: false,
            sort: false,
        };
        let mut buffer = Vec::new();
        output.write(&mut buffer, &vec![1, 2, 3]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[1,2,3]\n");
    }
}
