#![allow(missing_docs)]
//! Error types for the Teesa plugin

use std::fmt;

use thiserror::Error;

/// Error codes for Teesa provider operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeesaErrorCode {
    /// RPC or HTTP communication error
    NetworkError,
    /// View call reverted
    ContractRevert,
    /// Return data could not be decoded
    DecodeFailed,
    /// Invalid parameters provided
    InvalidParams,
    /// Required setting is missing
    ConfigMissing,
    /// Text generation failed
    GenerationFailed,
}

impl fmt::Display for TeesaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError => write!(f, "NETWORK_ERROR"),
            Self::ContractRevert => write!(f, "CONTRACT_REVERT"),
            Self::DecodeFailed => write!(f, "DECODE_FAILED"),
            Self::InvalidParams => write!(f, "INVALID_PARAMS"),
            Self::ConfigMissing => write!(f, "CONFIG_MISSING"),
            Self::GenerationFailed => write!(f, "GENERATION_FAILED"),
        }
    }
}

/// Teesa plugin error type
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct TeesaError {
    /// Error code
    pub code: TeesaErrorCode,
    /// Error message
    pub message: String,
    /// Source error (if any)
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TeesaError {
    /// Create a new error with a code and message
    #[must_use]
    pub fn new(code: TeesaErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with a source
    #[must_use]
    pub fn with_source<E>(code: TeesaErrorCode, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(TeesaErrorCode::NetworkError, message)
    }

    #[must_use]
    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::new(TeesaErrorCode::DecodeFailed, message)
    }

    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(TeesaErrorCode::InvalidParams, message)
    }

    /// Create a missing setting error
    #[must_use]
    pub fn config_missing(key: &str) -> Self {
        Self::new(
            TeesaErrorCode::ConfigMissing,
            format!("Setting '{key}' is not configured"),
        )
    }

    #[must_use]
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(TeesaErrorCode::GenerationFailed, message)
    }
}

impl From<reqwest::Error> for TeesaError {
    fn from(err: reqwest::Error) -> Self {
        Self::with_source(
            TeesaErrorCode::NetworkError,
            format!("HTTP request failed: {err}"),
            err,
        )
    }
}

impl From<serde_json::Error> for TeesaError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            TeesaErrorCode::DecodeFailed,
            format!("JSON parsing failed: {err}"),
            err,
        )
    }
}

impl From<url::ParseError> for TeesaError {
    fn from(err: url::ParseError) -> Self {
        Self::with_source(
            TeesaErrorCode::InvalidParams,
            format!("URL parsing failed: {err}"),
            err,
        )
    }
}

/// Result type alias for Teesa operations
pub type TeesaResult<T> = Result<T, TeesaError>;
