//! Client errors.

use bestpay_core::payload::PayloadError;
use bestpay_shared::AppError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors from [`crate::BestpayClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The payload was rejected before signing.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The transport failed; the message is passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No endpoint is registered for the operation.
    #[error("no endpoint registered at {endpoint_url}")]
    UnknownOperation {
        /// URL that was looked up.
        endpoint_url: String,
    },
}

impl ClientError {
    /// Returns the error code for logs and API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Payload(e) => e.error_code(),
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::UnknownOperation { .. } => "UNKNOWN_OPERATION",
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Payload(e) => e.into(),
            ClientError::Transport(e) => Self::Transport(e.to_string()),
            ClientError::UnknownOperation { .. } => Self::Configuration(err.to_string()),
        }
    }
}
