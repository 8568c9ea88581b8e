use std::fmt;

use moneymq_stripe_types::Open;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while calling the API
#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed to deliver the request or read the response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status and an error envelope
    #[error("API error (HTTP {status}): {error}")]
    Api {
        status: u16,
        error: ApiError,
        request_id: Option<String>,
    },

    /// A 2xx response body did not match the expected resource shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Parameters could not be turned into form pairs
    #[error("Encode error: {0}")]
    Encode(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The API error payload, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Category of an API error, from the envelope's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    ApiError,
    AuthenticationError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
    RateLimitError,
}

impl ApiErrorKind {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::ApiError => "api_error",
            ApiErrorKind::AuthenticationError => "authentication_error",
            ApiErrorKind::CardError => "card_error",
            ApiErrorKind::IdempotencyError => "idempotency_error",
            ApiErrorKind::InvalidRequestError => "invalid_request_error",
            ApiErrorKind::RateLimitError => "rate_limit_error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `error` object of an API error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error types newer than this client are kept as raw strings.
    #[serde(rename = "type")]
    pub kind: Open<ApiErrorKind>,
    /// Short string identifying the error, e.g. `resource_missing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// For card errors declined by the issuer, the reason given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The parameter the error relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

impl ApiError {
    /// Reads the `{ "error": { ... } }` envelope out of a response body.
    ///
    /// A body that is not a well-formed envelope still yields an error, of
    /// kind `api_error`, carrying the raw body as its message.
    pub fn from_body(body: &serde_json::Value) -> Self {
        match ErrorEnvelope::deserialize(body) {
            Ok(envelope) => envelope.error,
            Err(_) => ApiError {
                kind: Open::Known(ApiErrorKind::ApiError),
                code: None,
                decline_code: None,
                doc_url: None,
                message: Some(body.to_string()),
                param: None,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
