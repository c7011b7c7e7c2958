//! Contabo service adapter for WemX
//!
//! This crate implements the [`wemx_service::Service`] trait for Contabo and
//! exposes the compute operations behind it.
//!
//! # Features
//!
//! - Instance management (create, start, stop, shutdown, rescue, cancel)
//! - Root password reset and audit logs
//! - Static product / region catalogs for package and checkout forms
//!
//! # Authentication
//!
//! Every call performs a password-grant token request against Contabo's
//! identity service before the API request itself. Nothing is cached.
//! Credentials come from the host settings:
//!
//! - `contabo::client_id`
//! - `encrypted::contabo::client_secret`
//! - `contabo::username`
//! - `encrypted::contabo::user_password`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wemx_service::EnvSettings;
//! use wemx_service_contabo::{ContaboApi, ContaboClient, ContaboEndpoints};
//!
//! let client = ContaboClient::from_settings(Arc::new(EnvSettings), ContaboEndpoints::default());
//! let api = ContaboApi::new(client);
//!
//! let servers = api.get_servers().await?;
//! api.start_server("100123").await?;
//!
//! // Failures are logged, never returned
//! api.cancel_server("100123").await;
//! ```

pub mod api;
pub mod catalog;
pub mod client;
pub mod credentials;
pub mod error;
pub mod request;
pub mod service;
pub mod token;

pub use api::{ContaboApi, CreateServerRequest, cancel_diagnostic_tag};
pub use catalog::CatalogEntry;
pub use client::{ContaboClient, REQUEST_ID_HEADER};
pub use credentials::{Credentials, CredentialsProvider, SettingsCredentials};
pub use error::{ContaboError, Result};
pub use request::{ContaboEndpoints, Method, Payload, PayloadValue, RequestDescriptor};
pub use service::ContaboService;
pub use token::{AccessToken, TokenProvider};
