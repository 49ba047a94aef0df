//! Shared errors, configuration, and signing options for the Bestpay client.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - MAC digest selection

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, GatewayConfig};
pub use error::{AppError, AppResult};
pub use types::MacAlgorithm;
