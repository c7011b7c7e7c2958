//! Service trait definition

use crate::config::ConfigField;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host-facing service abstraction
///
/// Every provider adapter (Contabo, ...) implements this trait so the host
/// can render its settings, package and checkout forms, and drive order
/// lifecycle hooks without knowing the provider.
#[async_trait]
pub trait Service: Send + Sync {
    /// Settings key prefix for this service (e.g. "contabo")
    fn key(&self) -> &str;

    /// Static information shown in the host's service list
    fn metadata(&self) -> ServiceMetadata;

    /// Fields required to set the service up (hosts, credentials, ...)
    fn config_fields(&self) -> Vec<ConfigField>;

    /// Fields configured per package by an administrator
    fn package_config_fields(&self, package: &Package) -> Vec<ConfigField>;

    /// Fields filled in by the client at checkout
    fn checkout_config_fields(&self, package: &Package) -> Vec<ConfigField>;

    /// Check that the configured credentials reach the provider
    ///
    /// Never fails; failures are reported in the returned value.
    async fn test_connection(&self) -> ConnectionTest;

    /// Buttons shown on the order management page
    fn service_buttons(&self, order: &Order) -> Vec<ServiceButton>;

    /// Provision an instance for a new order
    async fn create(&self, order: &Order, data: &HookData) -> Result<HookOutput>;

    /// Move an order from one package to another
    async fn upgrade(
        &self,
        order: &Order,
        old_package: &Package,
        new_package: &Package,
    ) -> Result<HookOutput>;

    /// Called when an order expires or is suspended by an admin
    async fn suspend(&self, order: &Order, data: &HookData) -> Result<HookOutput>;

    /// Called when an order is activated or unsuspended by an admin
    async fn unsuspend(&self, order: &Order, data: &HookData) -> Result<HookOutput>;

    /// Remove the instance behind an order
    async fn terminate(&self, order: &Order, data: &HookData) -> Result<HookOutput>;
}

/// Free-form input handed to lifecycle hooks
pub type HookData = HashMap<String, serde_json::Value>;

/// Values returned by lifecycle hooks
pub type HookOutput = Vec<serde_json::Value>;

/// Service metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub display_name: String,

    pub author: String,

    pub version: String,

    /// Host versions this service supports, e.g. `["dev", ">=1.8.0"]`
    pub wemx_version: Vec<String>,
}

/// Outcome of [`Service::test_connection`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ConnectionTest {
    Success(String),
    Failure(String),
}

impl ConnectionTest {
    pub fn is_success(&self) -> bool {
        matches!(self, ConnectionTest::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ConnectionTest::Success(message) | ConnectionTest::Failure(message) => message,
        }
    }
}

/// A package as seen by adapters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Package {
    pub id: u64,

    pub name: String,

    /// Values of the fields from [`Service::package_config_fields`]
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl Package {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Get a package value as a specific type
    pub fn get_data<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// An order as seen by adapters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,

    pub package: Package,

    /// Provider-specific values stored on the order (instance id, ...)
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl Order {
    pub fn new(id: u64, package: Package) -> Self {
        Self {
            id,
            package,
            data: HashMap::new(),
        }
    }
}

/// A button on the order management page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceButton {
    pub name: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
