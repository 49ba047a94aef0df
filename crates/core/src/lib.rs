//! Core request-building logic for the Bestpay gateway.
//!
//! This crate contains pure logic with ZERO network dependencies.
//! Payload rules, canonical strings and signatures all live here.
//!
//! # Modules
//!
//! - `ledger` - Fund split across sub-merchants
//! - `bank` - Classification of reported funding-source codes
//! - `payload` - Operation payloads, validation, canonical strings, flattening
//! - `signing` - Request MAC computation
//! - `operation` - Endpoints, registry, and signed request assembly
//! - `response` - Gateway response field definitions

pub mod bank;
pub mod ledger;
pub mod operation;
pub mod payload;
pub mod response;
pub mod signing;
