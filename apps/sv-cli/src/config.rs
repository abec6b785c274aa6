//! Optional YAML defaults for the CLI.
//!
//! ```yaml
//! format:
//!   decimals: 2
//!   leading_space: false
//! separator: ","
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sv_core::FormatOptions;
use sv_core::format::DEFAULT_SEPARATOR;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub format: FormatOptions,
    pub separator: char,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: FormatOptions::default(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

pub fn parse_config(content: &str) -> CliResult<CliConfig> {
    serde_yaml::from_str(content).map_err(|e| CliError::ConfigParse(e.to_string()))
}

/// Load config from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> CliResult<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config("{}").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_format_section() {
        let config = parse_config("format:\n  decimals: 1\nseparator: \",\"\n").unwrap();
        assert_eq!(config.format.decimals, 1);
        assert!(config.format.leading_space);
        assert_eq!(config.separator, ',');
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("precision: 4\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/sv.yaml"))).unwrap_err();
        assert!(format!("{err}").contains("Failed to read config file"));
    }
}
