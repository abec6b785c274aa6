//! Error types for the sv-cli front end.

use std::path::PathBuf;

use sv_core::SvError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config YAML: {0}")]
    ConfigParse(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Core(#[from] SvError),
}

pub type CliResult<T> = Result<T, CliError>;
