//! Service host error types

use thiserror::Error;

/// Errors raised by the host-side collaborators (settings, diagnostics)
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    #[error("Settings file not found: {0}")]
    SettingsFileNotFound(String),

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Invalid settings file: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
