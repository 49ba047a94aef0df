//! Gateway operations, their endpoints, and request assembly.

pub mod assembler;
pub mod registry;
pub mod types;

pub use assembler::{RequestAssembler, SignedRequest};
pub use registry::{OperationDescriptor, OperationRegistry};
pub use types::Operation;
