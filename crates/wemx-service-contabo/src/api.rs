//! Contabo compute operations

use crate::client::ContaboClient;
use crate::error::{ContaboError, Result};
use crate::request::{Method, Payload};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use wemx_service::{DiagnosticsSink, Severity, TracingDiagnostics};

/// Page size for list endpoints
pub const PAGE_SIZE: u32 = 100;

/// Options for creating an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServerRequest {
    pub display_name: String,

    /// Image id (UUID)
    pub image: String,

    /// Product id, e.g. `V1`
    pub product: String,

    /// Region code, e.g. `EU`
    pub region: String,

    /// Contract period in months
    pub period: u32,
}

impl CreateServerRequest {
    fn payload(&self) -> Payload {
        Payload::new()
            .with("displayName", self.display_name.as_str())
            .with("imageId", self.image.as_str())
            .with("productId", self.product.as_str())
            .with("region", self.region.as_str())
            .with("period", self.period)
    }
}

/// Tag under which cancellation failures are reported
pub fn cancel_diagnostic_tag(server_id: &str) -> String {
    format!("contabo::cancel::server::{}", server_id)
}

/// `/compute/instances/{id}{suffix}`
///
/// The id is restricted to ASCII alphanumerics, `-` and `_` so it cannot
/// leave its path segment.
fn instance_path(server_id: &str, suffix: &str) -> Result<String> {
    let valid = !server_id.is_empty()
        && server_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ContaboError::InvalidServerId(server_id.to_string()));
    }
    Ok(format!("/compute/instances/{}{}", server_id, suffix))
}

/// Compute operations over [`ContaboClient`]
#[derive(Clone)]
pub struct ContaboApi {
    client: ContaboClient,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl ContaboApi {
    /// Cancellation failures go to `tracing`
    pub fn new(client: ContaboClient) -> Self {
        Self::with_diagnostics(client, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(client: ContaboClient, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            client,
            diagnostics,
        }
    }

    /// List available images
    pub async fn get_images(&self) -> Result<Value> {
        self.client
            .call(
                Method::Get,
                "/compute/images",
                Payload::new().with("size", PAGE_SIZE),
            )
            .await
    }

    /// List instances
    pub async fn get_servers(&self) -> Result<Value> {
        self.client
            .call(
                Method::Get,
                "/compute/instances",
                Payload::new().with("size", PAGE_SIZE),
            )
            .await
    }

    /// Create an instance
    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<Value> {
        tracing::info!(
            "Creating server {} ({} in {})",
            request.display_name,
            request.product,
            request.region
        );
        self.client
            .call(Method::Post, "/compute/instances", request.payload())
            .await
    }

    pub async fn get_server(&self, server_id: &str) -> Result<Value> {
        let path = instance_path(server_id, "")?;
        self.client.call(Method::Get, &path, Payload::new()).await
    }

    /// Audit log of actions performed on an instance
    pub async fn get_server_logs(&self, server_id: &str) -> Result<Value> {
        self.client
            .call(
                Method::Get,
                "/compute/instances/actions/audits",
                Payload::new().with("instanceId", server_id),
            )
            .await
    }

    /// Cancel an instance
    ///
    /// Never fails. Order termination must not be blocked by a failed
    /// cancellation, so the error is recorded on the diagnostics sink at
    /// `CRITICAL` under `contabo::cancel::server::<id>` and dropped.
    pub async fn cancel_server(&self, server_id: &str) {
        let _ = self.try_cancel_server(server_id).await;
    }

    /// [`cancel_server`](Self::cancel_server) that also returns the outcome
    ///
    /// A failure is recorded exactly as `cancel_server` records it before
    /// being returned.
    pub async fn try_cancel_server(&self, server_id: &str) -> Result<Value> {
        let result = match instance_path(server_id, "/cancel") {
            Ok(path) => self.client.call(Method::Post, &path, Payload::new()).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            self.diagnostics.record(
                &cancel_diagnostic_tag(server_id),
                &e.to_string(),
                Severity::Critical,
            );
        }
        result
    }

    pub async fn start_server(&self, server_id: &str) -> Result<Value> {
        self.instance_action(server_id, "start", Payload::new()).await
    }

    pub async fn stop_server(&self, server_id: &str) -> Result<Value> {
        self.instance_action(server_id, "stop", Payload::new()).await
    }

    /// Graceful ACPI shutdown
    pub async fn shutdown_server(&self, server_id: &str) -> Result<Value> {
        self.instance_action(server_id, "shutdown", Payload::new()).await
    }

    pub async fn enable_rescue_mode(&self, server_id: &str) -> Result<Value> {
        self.instance_action(server_id, "rescue", Payload::new()).await
    }

    pub async fn reset_password(&self, server_id: &str, password: &str) -> Result<Value> {
        self.instance_action(
            server_id,
            "resetPassword",
            Payload::new().with("rootPassword", password),
        )
        .await
    }

    async fn instance_action(
        &self,
        server_id: &str,
        action: &str,
        payload: Payload,
    ) -> Result<Value> {
        let path = instance_path(server_id, &format!("/actions/{}", action))?;
        tracing::info!("Instance {}: {}", server_id, action);
        self.client.call(Method::Post, &path, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_server_payload() {
        let request = CreateServerRequest {
            display_name: "web-01".to_string(),
            image: "04e0f898-37b4-48bc-a794-1a57abe6aa31".to_string(),
            product: "V45".to_string(),
            region: "EU".to_string(),
            period: 1,
        };

        let json = serde_json::to_value(request.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "displayName": "web-01",
                "imageId": "04e0f898-37b4-48bc-a794-1a57abe6aa31",
                "productId": "V45",
                "region": "EU",
                "period": 1,
            })
        );
    }

    #[test]
    fn test_instance_path() {
        assert_eq!(
            instance_path("100123", "/actions/start").unwrap(),
            "/compute/instances/100123/actions/start"
        );
        assert_eq!(
            instance_path("vps-01_a", "").unwrap(),
            "/compute/instances/vps-01_a"
        );

        for id in ["", "42/cancel?x=", "42#frag", "..", "42%2Fcancel", "4 2"] {
            match instance_path(id, "/cancel") {
                Err(ContaboError::InvalidServerId(rejected)) => assert_eq!(rejected, id),
                other => panic!("{:?} gave {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_cancel_diagnostic_tag() {
        assert_eq!(cancel_diagnostic_tag("abc123"), "contabo::cancel::server::abc123");
    }
}
