// Central registry of named assets
//
// Stores one file path per unique name, plus an optional runtime handle
// bound by the host application after it has loaded the asset.

use std::collections::{hash_map, HashMap};
use std::fmt;

use crate::entry::{try_copy, AssetEntry};
use crate::RegistryError;

/// Registry mapping unique asset names to file paths and runtime handles.
///
/// `R` is the caller's handle type: an integer id, a weak pointer, whatever
/// the host application uses to refer to a loaded resource. The registry
/// stores and returns `R` values opaquely; loading and releasing the
/// resources behind them stays with the caller.
pub struct AssetRegistry<R> {
    entries: HashMap<String, AssetEntry<R>>,
}

impl<R> AssetRegistry<R> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry pre-sized for `capacity` assets
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Register a new asset under `name` with the path of its file.
    ///
    /// The new entry starts with no runtime handle bound. Fails with
    /// [`RegistryError::AlreadyRegistered`] if the name is taken and with
    /// [`RegistryError::Allocation`] if storage for the copies cannot be
    /// obtained; neither failure leaves a partial entry behind.
    pub fn register(&mut self, name: &str, path: &str) -> Result<(), RegistryError> {
        if self.entries.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }

        // Reserve everything before inserting so a failed copy cannot
        // leave a half-built entry in the map
        self.entries.try_reserve(1)?;
        let name = try_copy(name)?;
        let path = try_copy(path)?;

        log::debug!("Registered asset '{}' -> '{}'", name, path);
        self.entries.insert(name, AssetEntry::new(path));
        Ok(())
    }

    /// Replace the file path of an existing asset.
    ///
    /// The bound runtime handle is left untouched: if the new path makes a
    /// previously bound resource stale, reloading and rebinding it is the
    /// caller's job. Fails with [`RegistryError::NotFound`] for unknown
    /// names; on an allocation failure the old path stays in place.
    pub fn update_path(&mut self, name: &str, new_path: &str) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        // Copy first; the old path must survive a failed allocation
        let new_path = try_copy(new_path)?;
        log::debug!("Updated asset '{}' path to '{}'", name, new_path);
        entry.path = new_path;
        Ok(())
    }

    /// Get the file path registered under `name`
    pub fn path(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.path.as_str())
    }

    /// Bind a runtime handle to an existing asset, returning the previously
    /// bound handle if there was one.
    ///
    /// Fails with [`RegistryError::NotFound`] for unknown names; binding
    /// never creates an entry.
    pub fn bind(&mut self, name: &str, resource: R) -> Result<Option<R>, RegistryError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        log::debug!("Bound runtime handle to asset '{}'", name);
        Ok(entry.resource.replace(resource))
    }

    /// Get the runtime handle bound to `name`.
    ///
    /// Returns `None` if the name is unknown or nothing has been bound yet.
    pub fn resource(&self, name: &str) -> Option<&R> {
        self.entries
            .get(name)
            .and_then(|entry| entry.resource.as_ref())
    }

    /// Remove an asset by name.
    ///
    /// Returns true if the asset was removed; a missing name is an ordinary
    /// negative result.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.entries.remove(name).is_some() {
            log::debug!("Removed asset '{}'", name);
            true
        } else {
            false
        }
    }

    /// Check whether an asset is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of registered assets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all assets
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over all (name, path) pairs in unspecified order.
    ///
    /// The shared borrow keeps the registry immutable while the iterator
    /// lives, so entries cannot be added or removed mid-iteration.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<R> Default for AssetRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: `R` need not be Debug
impl<R> fmt::Debug for AssetRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Iterator over the (name, path) pairs of a registry
pub struct Iter<'a, R> {
    inner: hash_map::Iter<'a, String, AssetEntry<R>>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, entry)| (name.as_str(), entry.path.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

impl<'a, R> IntoIterator for &'a AssetRegistry<R> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Iter<'a, R> {
        self.iter()
    }
}
