use std::path::PathBuf;

use thiserror::Error;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read ead-course config {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid ead-course config: {0}")]
    Invalid(#[from] toml::de::Error),
    #[error("ead-course config not found at {}", .0.display())]
    NotFound(PathBuf),
}
