//! Contabo API gateway client
//!
//! Each call authenticates from scratch, then issues exactly one request.

use crate::credentials::{CredentialsProvider, SettingsCredentials};
use crate::error::{ContaboError, Result};
use crate::request::{ContaboEndpoints, Method, Payload, RequestDescriptor};
use crate::token::TokenProvider;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;
use wemx_service::SettingsStore;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Contabo API client
#[derive(Clone)]
pub struct ContaboClient {
    http: reqwest::Client,
    endpoints: ContaboEndpoints,
    tokens: TokenProvider,
}

impl ContaboClient {
    /// Create a client against the production endpoints
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::with_endpoints(credentials, ContaboEndpoints::default())
    }

    /// Create a client against custom endpoints
    pub fn with_endpoints(
        credentials: Arc<dyn CredentialsProvider>,
        endpoints: ContaboEndpoints,
    ) -> Self {
        let http = reqwest::Client::new();
        let tokens = TokenProvider::new(http.clone(), endpoints.auth_url.clone(), credentials);
        Self {
            http,
            endpoints,
            tokens,
        }
    }

    /// Create a client reading credentials from the host settings
    pub fn from_settings(settings: Arc<dyn SettingsStore>, endpoints: ContaboEndpoints) -> Self {
        Self::with_endpoints(Arc::new(SettingsCredentials::new(settings)), endpoints)
    }

    /// Perform one API call and return the decoded body
    pub async fn call(&self, method: Method, path: &str, payload: Payload) -> Result<Value> {
        let request = RequestDescriptor::new(method, path, payload)?;
        self.execute(&request).await
    }

    /// Perform the call described by `request`
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<Value> {
        let token = self.tokens.fetch_token().await?;

        let request_id = Uuid::new_v4().to_string();
        let url = self.endpoints.api_url(request.path());

        tracing::debug!(
            request_id = %request_id,
            "Calling Contabo API: {} {}",
            request.method(),
            url
        );

        let builder = self
            .http
            .request(request.method().into(), &url)
            .bearer_auth(token.secret())
            .header(REQUEST_ID_HEADER, &request_id);

        let builder = match request.method() {
            Method::Get => builder.query(&request.payload().query_pairs()),
            Method::Post => builder.json(request.payload()),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(request_id = %request_id, "Request did not complete: {}", e);
            ContaboError::ConnectionFailed
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                request_id = %request_id,
                "{} {} failed with status {}",
                request.method(),
                request.path(),
                status
            );
            return Err(ContaboError::from_status(status));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!(request_id = %request_id, "Failed to read response: {}", e);
            ContaboError::ConnectionFailed
        })?;

        decode_body(&body)
    }
}

/// Decode a success body; an empty body is `null`
fn decode_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
