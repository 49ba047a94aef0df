//! Client for the Bestpay merchant gateway.
//!
//! Wires the pure request pipeline from `bestpay-core` to an HTTP transport:
//! - `transport` - the send-a-form capability and its reqwest implementation
//! - `client` - `BestpayClient`, which assembles, signs and sends requests
//! - `error` - client error type

pub mod client;
pub mod error;
pub mod transport;

pub use client::BestpayClient;
pub use error::ClientError;
pub use transport::{HttpTransport, Transport, TransportError};
