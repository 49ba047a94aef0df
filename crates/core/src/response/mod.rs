//! Gateway response field definitions.
//!
//! Responses are returned raw by the client; these types let callers decode
//! them when they want to.

pub mod types;

pub use types::{
    GatewayResponse, PlaceOrderResult, QueryOrderResult, RefundResult, ReverseResult, TransStatus,
};
