//! Request descriptors for the Contabo REST API

use crate::error::{ContaboError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_AUTH_URL: &str =
    "https://auth.contabo.com/auth/realms/contabo/protocol/openid-connect/token";
pub const DEFAULT_API_BASE: &str = "https://api.contabo.com";

/// Identity and API locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContaboEndpoints {
    /// Password-grant token endpoint
    pub auth_url: String,

    /// API base URL, without the `/v1` prefix
    pub api_base: String,
}

impl Default for ContaboEndpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ContaboEndpoints {
    pub fn new(auth_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
            api_base: api_base.into(),
        }
    }

    /// Full URL for a provider-relative path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.api_base.trim_end_matches('/'), path)
    }
}

/// HTTP verbs the API surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A payload field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    List(Vec<PayloadValue>),
}

impl PayloadValue {
    /// Query-string rendering of a scalar
    fn as_query_value(&self) -> Option<String> {
        match self {
            PayloadValue::Text(s) => Some(s.clone()),
            PayloadValue::Integer(i) => Some(i.to_string()),
            PayloadValue::Bool(b) => Some(b.to_string()),
            PayloadValue::List(_) => None,
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value)
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        PayloadValue::Integer(value)
    }
}

impl From<u32> for PayloadValue {
    fn from(value: u32) -> Self {
        PayloadValue::Integer(i64::from(value))
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue::Bool(value)
    }
}

impl<T: Into<PayloadValue>> From<Vec<T>> for PayloadValue {
    fn from(values: Vec<T>) -> Self {
        PayloadValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Flat field-name → value mapping
///
/// Sent as query parameters for GET and as a JSON object for POST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, PayloadValue>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Query pairs; list values repeat their key once per element
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                PayloadValue::List(items) => {
                    pairs.extend(
                        items
                            .iter()
                            .filter_map(PayloadValue::as_query_value)
                            .map(|v| (key.clone(), v)),
                    );
                }
                scalar => {
                    if let Some(v) = scalar.as_query_value() {
                        pairs.push((key.clone(), v));
                    }
                }
            }
        }
        pairs
    }
}

/// A single API call: verb, provider-relative path, payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    payload: Payload,
}

impl RequestDescriptor {
    /// Build a descriptor; `path` must start with `/`
    pub fn new(method: Method, path: impl Into<String>, payload: Payload) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(ContaboError::InvalidPath(path));
        }
        Ok(Self {
            method,
            path,
            payload,
        })
    }

    pub fn get(path: impl Into<String>, payload: Payload) -> Result<Self> {
        Self::new(Method::Get, path, payload)
    }

    pub fn post(path: impl Into<String>, payload: Payload) -> Result<Self> {
        Self::new(Method::Post, path, payload)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let endpoints = ContaboEndpoints::default();
        assert_eq!(
            endpoints.api_url("/compute/instances"),
            "https://api.contabo.com/v1/compute/instances"
        );

        let local = ContaboEndpoints::new("http://127.0.0.1:1/token", "http://127.0.0.1:1/");
        assert_eq!(local.api_url("/compute/images"), "http://127.0.0.1:1/v1/compute/images");
    }

    #[test]
    fn test_descriptor_requires_leading_slash() {
        assert!(RequestDescriptor::get("/compute/images", Payload::new()).is_ok());
        assert!(matches!(
            RequestDescriptor::post("compute/images", Payload::new()),
            Err(ContaboError::InvalidPath(path)) if path == "compute/images"
        ));
    }

    #[test]
    fn test_query_pairs() {
        let payload = Payload::new()
            .with("size", 100u32)
            .with("instanceId", "abc")
            .with("region", vec!["EU", "UK"])
            .with("dryRun", false);

        assert_eq!(
            payload.query_pairs(),
            vec![
                ("dryRun".to_string(), "false".to_string()),
                ("instanceId".to_string(), "abc".to_string()),
                ("region".to_string(), "EU".to_string()),
                ("region".to_string(), "UK".to_string()),
                ("size".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_payload_json_body() {
        let payload = Payload::new()
            .with("displayName", "web-01")
            .with("period", 1u32);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json, serde_json::json!({"displayName": "web-01", "period": 1}));
        assert_eq!(serde_json::to_value(Payload::new()).unwrap(), serde_json::json!({}));
    }
}
