//! Contabo API credentials

use crate::error::{ContaboError, Result};
use std::sync::Arc;
use wemx_service::{ServiceError, SettingsStore};

pub const CLIENT_ID_KEY: &str = "contabo::client_id";
pub const CLIENT_SECRET_KEY: &str = "encrypted::contabo::client_secret";
pub const USERNAME_KEY: &str = "contabo::username";
pub const PASSWORD_KEY: &str = "encrypted::contabo::user_password";

/// The four values exchanged for an access token
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Supplies credentials at call time
pub trait CredentialsProvider: Send + Sync {
    fn credentials(&self) -> Result<Credentials>;
}

/// Fixed credentials
impl CredentialsProvider for Credentials {
    fn credentials(&self) -> Result<Credentials> {
        Ok(self.clone())
    }
}

/// Reads credentials from the host's settings store on every call
#[derive(Clone)]
pub struct SettingsCredentials {
    settings: Arc<dyn SettingsStore>,
}

impl SettingsCredentials {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    fn require(&self, key: &str) -> Result<String> {
        self.settings.require(key).map_err(|e| match e {
            ServiceError::SettingNotFound(key) => ContaboError::MissingSetting(key),
            other => ContaboError::MissingSetting(other.to_string()),
        })
    }
}

impl CredentialsProvider for SettingsCredentials {
    fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            client_id: self.require(CLIENT_ID_KEY)?,
            client_secret: self.require(CLIENT_SECRET_KEY)?,
            username: self.require(USERNAME_KEY)?,
            password: self.require(PASSWORD_KEY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wemx_service::MemorySettings;

    fn full_settings() -> MemorySettings {
        MemorySettings::new()
            .with(CLIENT_ID_KEY, "INT-1")
            .with(CLIENT_SECRET_KEY, "secret")
            .with(USERNAME_KEY, "ops@example.com")
            .with(PASSWORD_KEY, "hunter2")
    }

    #[test]
    fn test_settings_credentials() {
        let provider = SettingsCredentials::new(Arc::new(full_settings()));
        let credentials = provider.credentials().unwrap();

        assert_eq!(
            credentials,
            Credentials::new("INT-1", "secret", "ops@example.com", "hunter2")
        );
    }

    #[test]
    fn test_settings_credentials_missing_value() {
        let mut settings = full_settings();
        settings.set(PASSWORD_KEY, "");
        let provider = SettingsCredentials::new(Arc::new(settings));

        match provider.credentials() {
            Err(ContaboError::MissingSetting(key)) => assert_eq!(key, PASSWORD_KEY),
            other => panic!("Expected MissingSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("INT-1", "secret", "ops@example.com", "hunter2");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("INT-1"));
        assert!(!debug.contains("\"secret\""));
        assert!(!debug.contains("hunter2"));
    }
}
