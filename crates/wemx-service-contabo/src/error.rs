//! Contabo adapter error types

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContaboError {
    /// 401/403 from the identity service or the API
    #[error("[Contabo] This action is unauthorized! Confirm that the config is setup correctly")]
    Unauthorized,

    /// 5xx from the identity service or the API
    #[error("[Contabo] Internal Server Error: {status}")]
    UpstreamServerError { status: u16 },

    /// Any other non-2xx status, or the request never completed
    #[error("[Contabo] Failed to connect to the API! Confirm that the config is setup correctly")]
    ConnectionFailed,

    /// The identity service answered 2xx without an `access_token`
    #[error("[Contabo] Access token was not returned from the Contabo API.")]
    MissingToken,

    #[error("[Contabo] Missing configuration value: {0}")]
    MissingSetting(String),

    #[error("[Contabo] Invalid request path: {0}")]
    InvalidPath(String),

    /// Instance ids must form a single path segment
    #[error("[Contabo] Invalid server id: {0:?}")]
    InvalidServerId(String),

    #[error("[Contabo] Invalid response from the Contabo API: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ContaboError {
    /// Classify a non-2xx status
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ContaboError::Unauthorized,
            s if s.is_server_error() => ContaboError::UpstreamServerError { status: s.as_u16() },
            _ => ContaboError::ConnectionFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContaboError>;
