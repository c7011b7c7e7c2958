//! Password-grant token acquisition
//!
//! Tokens are fetched fresh for every API call and dropped afterwards; expiry
//! is never looked at.

use crate::credentials::CredentialsProvider;
use crate::error::{ContaboError, Result};
use std::sync::Arc;

/// An opaque bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header only
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Exchanges stored credentials for an access token
#[derive(Clone)]
pub struct TokenProvider {
    http: reqwest::Client,
    auth_url: String,
    credentials: Arc<dyn CredentialsProvider>,
}

impl TokenProvider {
    pub fn new(
        http: reqwest::Client,
        auth_url: impl Into<String>,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> Self {
        Self {
            http,
            auth_url: auth_url.into(),
            credentials,
        }
    }

    /// Fetch a new access token
    pub async fn fetch_token(&self) -> Result<AccessToken> {
        let credentials = self.credentials.credentials()?;

        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("grant_type", "password"),
        ];

        tracing::debug!("Requesting access token: POST {}", self.auth_url);

        let response = self
            .http
            .post(&self.auth_url)
            .form(&form[..])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Token request did not complete: {}", e);
                ContaboError::ConnectionFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Token request failed with status {}", status);
            return Err(ContaboError::from_status(status));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read token response: {}", e);
            ContaboError::ConnectionFailed
        })?;

        extract_access_token(&body).ok_or(ContaboError::MissingToken)
    }
}

/// Pull `access_token` out of a token response body
fn extract_access_token(body: &str) -> Option<AccessToken> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("access_token")?
        .as_str()
        .filter(|token| !token.is_empty())
        .map(AccessToken::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_access_token() {
        let token = extract_access_token(r#"{"access_token":"eyJ.abc","expires_in":300}"#);
        assert_eq!(token, Some(AccessToken::new("eyJ.abc")));
    }

    #[test]
    fn test_extract_access_token_missing() {
        assert!(extract_access_token(r#"{"token_type":"Bearer"}"#).is_none());
        assert!(extract_access_token(r#"{"access_token":""}"#).is_none());
        assert!(extract_access_token(r#"{"access_token":42}"#).is_none());
        assert!(extract_access_token("<html>ok</html>").is_none());
        assert!(extract_access_token("").is_none());
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("eyJ.secret");
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
    }
}
