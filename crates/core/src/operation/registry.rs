//! Endpoint registry.
//!
//! Built once at startup and shared read-only afterwards. Lookups never
//! fail: an unregistered URL yields an empty descriptor.

use std::collections::HashMap;

use super::types::Operation;

/// What the registry knows about one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Full endpoint URL.
    pub endpoint_url: String,
    /// Name used in logs.
    pub display_name: String,
}

impl OperationDescriptor {
    /// True for the empty descriptor returned on a lookup miss.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !self.endpoint_url.is_empty()
    }
}

/// Endpoint URL to descriptor map, plus the base URL operations resolve against.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    base_url: String,
    descriptors: HashMap<String, OperationDescriptor>,
}

impl OperationRegistry {
    /// Creates an empty registry for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            descriptors: HashMap::new(),
        }
    }

    /// Creates a registry with all four gateway operations under `base_url`.
    #[must_use]
    pub fn with_defaults(base_url: impl Into<String>) -> Self {
        let mut registry = Self::new(base_url);
        for op in Operation::ALL {
            let url = op.endpoint_url(&registry.base_url);
            registry.register(url, op.display_name());
        }
        registry
    }

    /// Inserts or replaces the descriptor for `endpoint_url`.
    pub fn register(&mut self, endpoint_url: impl Into<String>, display_name: impl Into<String>) {
        let endpoint_url = endpoint_url.into();
        let descriptor = OperationDescriptor {
            endpoint_url: endpoint_url.clone(),
            display_name: display_name.into(),
        };
        self.descriptors.insert(endpoint_url, descriptor);
    }

    /// Returns the descriptor for `endpoint_url`, or an empty one.
    #[must_use]
    pub fn lookup(&self, endpoint_url: &str) -> OperationDescriptor {
        self.descriptors
            .get(endpoint_url)
            .cloned()
            .unwrap_or_default()
    }

    /// Descriptor for `op` under this registry's base URL.
    #[must_use]
    pub fn descriptor(&self, op: Operation) -> OperationDescriptor {
        self.lookup(&self.endpoint_url(op))
    }

    /// Endpoint URL of `op` under this registry's base URL.
    #[must_use]
    pub fn endpoint_url(&self, op: Operation) -> String {
        op.endpoint_url(&self.base_url)
    }

    /// Base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of registered endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
