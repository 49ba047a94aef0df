//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Module errors (ledger, payload, transport) are lifted into this type at
/// the edges of the application, e.g. in the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// A field is missing, too long, or badly formatted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation spanning several fields.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// The HTTP collaborator failed. The message is passed through untouched.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the error code for logs and CLI output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns the process exit code used by the CLI for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::BusinessRule(_) => 2,
            Self::Transport(_) => 3,
            Self::Configuration(_) => 78,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
