// Per-asset record storage

use std::collections::TryReserveError;

/// One registered asset: its file path plus an optionally bound runtime
/// handle. The name identifying the entry lives in the registry's map key.
pub(crate) struct AssetEntry<R> {
    pub(crate) path: String,
    pub(crate) resource: Option<R>,
}

impl<R> AssetEntry<R> {
    /// Create an entry with no runtime handle bound yet
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            resource: None,
        }
    }
}

/// Copy a borrowed string into owned storage, reporting allocation failure
/// instead of aborting the process.
pub(crate) fn try_copy(s: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}
