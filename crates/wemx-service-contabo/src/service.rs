//! Contabo service for the WemX host

use crate::api::ContaboApi;
use crate::catalog::{
    self, DEFAULT_IMAGE, DEFAULT_PRODUCT, DEFAULT_REGION, IMAGES, PRODUCTS, REGIONS,
};
use crate::credentials::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, PASSWORD_KEY, USERNAME_KEY};
use async_trait::async_trait;
use wemx_service::{
    ConfigField, ConnectionTest, FieldType, HookData, HookOutput, Order, Package, Service,
    ServiceButton, ServiceMetadata,
};

/// Settings key prefix
pub const SERVICE_KEY: &str = "contabo";

/// Contabo service
///
/// Describes the Contabo settings and catalogs to the host. The order
/// lifecycle hooks are no-ops; instances are driven through [`ContaboApi`].
#[derive(Clone)]
pub struct ContaboService {
    api: ContaboApi,
}

impl ContaboService {
    pub fn new(api: ContaboApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ContaboApi {
        &self.api
    }
}

#[async_trait]
impl Service for ContaboService {
    fn key(&self) -> &str {
        SERVICE_KEY
    }

    fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            display_name: "Contabo".to_string(),
            author: "WemX".to_string(),
            version: "1.0.0".to_string(),
            wemx_version: vec!["dev".to_string(), ">=1.8.0".to_string()],
        }
    }

    fn config_fields(&self) -> Vec<ConfigField> {
        vec![
            ConfigField::new(
                CLIENT_ID_KEY,
                "Client ID",
                "ClientId of your contabo account",
                FieldType::Text,
            )
            .with_rules(["required"]),
            ConfigField::new(
                CLIENT_SECRET_KEY,
                "Client Secret",
                "Client Secret of your contabo account",
                FieldType::Password,
            )
            .with_rules(["required"]),
            ConfigField::new(
                USERNAME_KEY,
                "Contabo Username",
                "Username of your contabo account",
                FieldType::Email,
            )
            .with_rules(["required", "email"]),
            ConfigField::new(
                PASSWORD_KEY,
                "Contabo Account Password",
                "Password of your contabo account",
                FieldType::Password,
            )
            .with_rules(["required"]),
        ]
    }

    fn package_config_fields(&self, _package: &Package) -> Vec<ConfigField> {
        vec![
            ConfigField::new(
                "product",
                "Product ID",
                "ID of the contabo product",
                FieldType::Select,
            )
            .with_col("col-12")
            .with_options(catalog::select_options(PRODUCTS))
            .with_default(DEFAULT_PRODUCT)
            .with_rules(["required"]),
            ConfigField::new(
                "region[]",
                "Allowed Regions",
                "Allowed regions for this package at checkout by the user",
                FieldType::Select,
            )
            .with_col("col-12")
            .with_options(catalog::select_options(REGIONS))
            .multiple()
            .with_default(DEFAULT_REGION)
            .with_rules(["required"]),
        ]
    }

    // TODO: narrow the region options to the package's `region[]` selection
    fn checkout_config_fields(&self, _package: &Package) -> Vec<ConfigField> {
        vec![
            ConfigField::new(
                "region",
                "Region",
                "Select the region for your server",
                FieldType::Select,
            )
            .with_options(catalog::select_options(REGIONS))
            .with_default(DEFAULT_REGION)
            .with_rules(["required"]),
            ConfigField::new(
                "image",
                "Image",
                "Select the image for your server",
                FieldType::Select,
            )
            .with_options(catalog::select_options(IMAGES))
            .with_default(DEFAULT_IMAGE)
            .with_rules(["required"]),
        ]
    }

    async fn test_connection(&self) -> ConnectionTest {
        match self.api.get_servers().await {
            Ok(_) => ConnectionTest::Success("Successfully connected with Contabo API".to_string()),
            Err(e) => {
                tracing::warn!("Contabo connection test failed: {}", e);
                ConnectionTest::Failure(format!("Failed to connect to Contabo. <br><br>{}", e))
            }
        }
    }

    fn service_buttons(&self, _order: &Order) -> Vec<ServiceButton> {
        Vec::new()
    }

    async fn create(&self, _order: &Order, _data: &HookData) -> wemx_service::Result<HookOutput> {
        Ok(Vec::new())
    }

    async fn upgrade(
        &self,
        _order: &Order,
        _old_package: &Package,
        _new_package: &Package,
    ) -> wemx_service::Result<HookOutput> {
        Ok(Vec::new())
    }

    async fn suspend(&self, _order: &Order, _data: &HookData) -> wemx_service::Result<HookOutput> {
        Ok(Vec::new())
    }

    async fn unsuspend(
        &self,
        _order: &Order,
        _data: &HookData,
    ) -> wemx_service::Result<HookOutput> {
        Ok(Vec::new())
    }

    async fn terminate(
        &self,
        _order: &Order,
        _data: &HookData,
    ) -> wemx_service::Result<HookOutput> {
        Ok(Vec::new())
    }
}
