//! WemX service host abstraction
//!
//! This crate holds the pieces a provider adapter shares with the WemX host:
//! the [`Service`] trait the host drives, the settings stores adapters read
//! credentials from, and the diagnostics sink for out-of-band failures.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   WemX host                      │
//! │        (orders, packages, checkout UI)           │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                 wemx-service                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          trait Service { ... }            │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │   Settings   │  │ Diagnostics  │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │    contabo    │
//! │    adapter    │
//! └───────────────┘
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod service;
pub mod settings;

// Re-exports
pub use config::{ConfigField, FieldType, SelectOption};
pub use diagnostics::{
    DiagnosticEntry, DiagnosticsSink, MemoryDiagnostics, Severity, TracingDiagnostics,
};
pub use error::{Result, ServiceError};
pub use service::{
    ConnectionTest, HookData, HookOutput, Order, Package, Service, ServiceButton,
    ServiceMetadata,
};
pub use settings::{EnvSettings, FileSettings, MemorySettings, SettingsStore};
