//! Named asset registry
//!
//! Maps unique asset names to their file paths and, once the host
//! application has loaded them, to opaque runtime handles. The registry
//! owns the name and path strings; the handle is caller-managed data that
//! is stored and returned but never interpreted or released here.

mod entry;
mod registry;

pub use registry::{AssetRegistry, Iter};

/// Registry operation errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}
