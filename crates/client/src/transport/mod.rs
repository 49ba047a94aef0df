//! Transport collaborator.
//!
//! The only capability the client needs: POST a flat form to a URL and hand
//! back the raw body. No retries, no interpretation of the body.

pub mod http;

use async_trait::async_trait;
use bestpay_core::payload::FormFields;
use thiserror::Error;

pub use http::HttpTransport;

/// Opaque transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wraps a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message as reported.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Sends form payloads to gateway endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `fields` as a form to `endpoint_url` and returns the response body.
    async fn send(&self, endpoint_url: &str, fields: &FormFields) -> Result<String, TransportError>;
}
