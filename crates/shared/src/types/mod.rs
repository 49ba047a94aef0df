//! Common types used across the application.

pub mod mac;

pub use mac::MacAlgorithm;
