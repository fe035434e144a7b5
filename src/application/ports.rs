use serde::{Deserialize, Serialize};

use crate::domain::address::PostalAddress;
use crate::domain::bank::Bank;
use crate::domain::null_as_default;

/// Error body returned by BrasilAPI on any non-200 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Present when several upstream providers were tried and each failed.
    #[serde(
        rename = "errors",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_errors: Vec<SubError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service: String,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            ApiError::Service(e) => Some(e),
            _ => None,
        }
    }
}

/// Status and fully-read body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub trait HttpTransport: Send + Sync {
    /// Fails only with [`ApiError::Transport`]; any status code is a successful exchange.
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

pub trait BrasilApi {
    fn get_address(&self, cep: &str) -> Result<PostalAddress, ApiError>;
    fn list_banks(&self) -> Result<Vec<Bank>, ApiError>;
    fn get_bank_by_code(&self, code: &str) -> Result<Bank, ApiError>;
}
