//! Key/value settings stores
//!
//! The host owns its settings; adapters only ever read from them. Keys follow
//! the host convention `<service>::<name>`, with an `encrypted::` prefix for
//! values the host keeps encrypted at rest. Stores hand out the plain value.

use crate::error::{Result, ServiceError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const ENCRYPTED_PREFIX: &str = "encrypted::";
const SETTINGS_DIR: &str = "wemx";
const SETTINGS_FILE: &str = "settings.yaml";
const SETTINGS_PATH_ENV: &str = "WEMX_SETTINGS_PATH";

/// Read-only view of the host's settings
pub trait SettingsStore: Send + Sync {
    /// Look up a setting by its full key
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a setting, failing when it is absent or blank
    fn require(&self, key: &str) -> Result<String> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ServiceError::SettingNotFound(key.to_string())),
        }
    }
}

/// In-memory settings, used by embedding hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings read from process environment variables
///
/// `encrypted::contabo::client_secret` is read from `CONTABO_CLIENT_SECRET`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl EnvSettings {
    pub fn new() -> Self {
        Self
    }

    /// Environment variable name for a settings key
    pub fn var_name(key: &str) -> String {
        key.trim_start_matches(ENCRYPTED_PREFIX)
            .replace("::", "_")
            .replace(['-', '.'], "_")
            .to_uppercase()
    }
}

impl SettingsStore for EnvSettings {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(Self::var_name(key)).ok()
    }
}

/// Settings loaded from a flat YAML mapping
///
/// ```yaml
/// contabo::client_id: INT-12345
/// encrypted::contabo::client_secret: s3cret
/// ```
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileSettings {
    /// Load settings from the given file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ServiceError::SettingsFileNotFound(
                path.display().to_string(),
            ));
        }

        let content = std::fs::read_to_string(&path)?;
        let raw: HashMap<String, serde_yaml::Value> = if content.trim().is_empty() {
            HashMap::new()
        } else {
            serde_yaml::from_str(&content)?
        };

        let mut values = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Null => continue,
                _ => {
                    return Err(ServiceError::InvalidSettings(format!(
                        "{}: value of '{}' must be a scalar",
                        path.display(),
                        key
                    )));
                }
            };
            values.insert(key, value);
        }

        tracing::debug!("Loaded {} settings from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Load settings from the default location
    ///
    /// 1. `WEMX_SETTINGS_PATH` when set
    /// 2. `<config_dir>/wemx/settings.yaml`
    pub fn load_default() -> Result<Self> {
        Self::load(default_settings_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Resolve the default settings file path
pub fn default_settings_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().ok_or(ServiceError::ConfigDirNotFound)?;
    Ok(config_dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_memory_settings_require() {
        let settings = MemorySettings::new()
            .with("contabo::client_id", "INT-1")
            .with("contabo::username", "   ");

        assert_eq!(settings.require("contabo::client_id").unwrap(), "INT-1");
        assert!(matches!(
            settings.require("contabo::username"),
            Err(ServiceError::SettingNotFound(key)) if key == "contabo::username"
        ));
        assert!(settings.require("contabo::missing").is_err());
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(EnvSettings::var_name("contabo::client_id"), "CONTABO_CLIENT_ID");
        assert_eq!(
            EnvSettings::var_name("encrypted::contabo::user_password"),
            "CONTABO_USER_PASSWORD"
        );
    }

    #[test]
    fn test_env_settings_reads_process_env() {
        temp_env::with_var("CONTABO_CLIENT_SECRET", Some("from-env"), || {
            let settings = EnvSettings::new();
            assert_eq!(
                settings.get("encrypted::contabo::client_secret").as_deref(),
                Some("from-env")
            );
        });
    }

    #[test]
    fn test_file_settings_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        fs::write(
            &path,
            "contabo::client_id: INT-42\nencrypted::contabo::client_secret: abc\nretries: 3\nunset: ~\n",
        )
        .unwrap();

        let settings = FileSettings::load(&path).unwrap();
        assert_eq!(settings.get("contabo::client_id").as_deref(), Some("INT-42"));
        assert_eq!(
            settings.get("encrypted::contabo::client_secret").as_deref(),
            Some("abc")
        );
        assert_eq!(settings.get("retries").as_deref(), Some("3"));
        assert!(settings.get("unset").is_none());
    }

    #[test]
    fn test_file_settings_rejects_nested_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        fs::write(&path, "contabo::client_id:\n  nested: true\n").unwrap();

        assert!(matches!(
            FileSettings::load(&path),
            Err(ServiceError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_file_settings_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = FileSettings::load(temp_dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ServiceError::SettingsFileNotFound(_))));
    }

    #[test]
    fn test_default_settings_path_env_override() {
        temp_env::with_var(SETTINGS_PATH_ENV, Some("/tmp/custom.yaml"), || {
            assert_eq!(
                default_settings_path().unwrap(),
                PathBuf::from("/tmp/custom.yaml")
            );
        });
    }
}
