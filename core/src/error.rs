use std::time::Duration;

use reqwest::StatusCode;
use skiff_protocol::INTERNAL_ERROR_CODE;
use skiff_protocol::INVALID_REQUEST_ERROR_CODE;
use skiff_protocol::JSONRPCErrorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkiffErr>;

/// Failures a model-list refresh can produce.
///
/// The rendered messages are part of the contract: they cross the process
/// boundary verbatim and the frontend classifier keys on the status code or
/// transport marker they carry.
#[derive(Debug, Error)]
pub enum SkiffErr {
    /// Endpoint config was submitted without a base URL.
    #[error("Base URL is required")]
    MissingBaseUrl,

    /// Base URL is present but is not a parseable absolute URL.
    #[error("Invalid Base URL format")]
    InvalidBaseUrl,

    /// TCP/TLS/DNS level failure before any HTTP response arrived.
    #[error("network error: unable to connect to {0}")]
    ConnectionFailed(String),

    /// The request hit the configured deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

impl SkiffErr {
    /// True for failures the validator produced before any network access.
    pub fn is_validation(&self) -> bool {
        matches!(self, SkiffErr::MissingBaseUrl | SkiffErr::InvalidBaseUrl)
    }
}

impl From<&SkiffErr> for JSONRPCErrorError {
    fn from(err: &SkiffErr) -> Self {
        let code = if err.is_validation() {
            INVALID_REQUEST_ERROR_CODE
        } else {
            INTERNAL_ERROR_CODE
        };
        JSONRPCErrorError {
            code,
            message: err.to_string(),
            data: None,
        }
    }
}
