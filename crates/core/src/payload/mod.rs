//! Business payloads for the four gateway operations.
//!
//! - `types` - payload structs and the `BizPayload` union
//! - `validation` - per-operation field rules
//! - `canonical` - signing strings in the gateway's fixed field order
//! - `wire` - flattening into form fields

pub mod canonical;
pub mod error;
pub mod fields;
pub mod types;
pub mod validation;
pub mod wire;

#[cfg(test)]
mod validation_props;

pub use canonical::{CanonicalBuilder, FixedOrderCanonical, canonical_string};
pub use error::PayloadError;
pub use types::{
    BizPayload, GoodsDetail, PlaceOrderPayload, QueryOrderPayload, RefundPayload, ReversePayload,
};
pub use validation::Validate;
pub use wire::{FormFields, flatten};

#[cfg(test)]
pub use canonical::MockCanonicalBuilder;
