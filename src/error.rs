use crate::models::ApiErrorResponse;
use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Datadog client error types
#[derive(Error, Debug)]
pub enum DatadogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request body compression failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Invalid response body: {message}")]
    Decode { message: String, body: Bytes },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unstable operation '{0}' is disabled")]
    UnstableOperationDisabled(String),

    #[error("Invalid server configuration: {0}")]
    ServerConfiguration(String),
}

/// Result type for Datadog operations
pub type DatadogResult<T> = Result<T, DatadogError>;

impl DatadogError {
    /// Create an authentication error
    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a server configuration error
    pub fn server_config(message: impl Into<String>) -> Self {
        Self::ServerConfiguration(message.into())
    }

    /// HTTP status of the failed call, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => Some(err.status()),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Api(err) => Some(err.body()),
            Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Error returned for any response with a status of 300 or above.
///
/// The raw body is always kept. When the operation documents the status
/// code, the body is also decoded into [`ApiErrorResponse`].
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: Bytes,
    model: Option<ApiErrorResponse>,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Bytes, model: Option<ApiErrorResponse>) -> Self {
        Self { status, body, model }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decoded error payload, if the status code was a documented one.
    pub fn model(&self) -> Option<&ApiErrorResponse> {
        self.model.as_ref()
    }

    /// Error strings from the decoded payload, empty when none was decoded.
    pub fn errors(&self) -> &[String] {
        self.model
            .as_ref()
            .map(|model| model.errors.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)
    }
}

impl std::error::Error for ApiError {}
