//! Physical store capability.
//!
//! The facade persists through a [`StorageArea`]: a string key-value
//! substrate with enumerable keys, modeled on browser storage semantics.
//! The trait is infallible by contract — the substrate has no error
//! channel worth surfacing here (quota handling is out of scope), and
//! absent keys are represented as `None`.
//!
//! A process-global **scope registry** plays the role of the browser's
//! global context: the host installs one store per [`StorageScope`] and
//! facades resolve their store from it at construction. When no store
//! is installed for a scope, facades bound to it degrade to no-ops —
//! the supported mode for headless execution contexts.

mod memory;

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::StorageScope;

pub use memory::MemoryStore;

/// String key-value substrate with enumerable keys.
///
/// Implementations must be internally thread-safe; the facade adds no
/// locking of its own. Enumeration order (`key`, `keys`) is
/// store-defined but must be stable between mutations — [`MemoryStore`]
/// uses insertion order.
pub trait StorageArea: Send + Sync {
    /// Returns the value stored at `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` at `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str);

    /// Deletes `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Deletes every key.
    fn clear(&self);

    /// Returns the key at `index` in enumeration order, or `None` when
    /// out of range.
    fn key(&self, index: usize) -> Option<String>;

    /// Returns the number of stored keys.
    fn len(&self) -> usize;

    /// Returns `true` when no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every key in enumeration order.
    fn keys(&self) -> Vec<String>;
}

static LOCAL_STORE: RwLock<Option<Arc<dyn StorageArea>>> = RwLock::new(None);
static SESSION_STORE: RwLock<Option<Arc<dyn StorageArea>>> = RwLock::new(None);

fn slot(scope: StorageScope) -> &'static RwLock<Option<Arc<dyn StorageArea>>> {
    match scope {
        StorageScope::Local => &LOCAL_STORE,
        StorageScope::Session => &SESSION_STORE,
    }
}

/// Installs `store` as the process-wide store for `scope`, replacing
/// any previous one.
///
/// Facades constructed afterwards resolve to it; already-constructed
/// facades keep the handle they resolved.
pub fn install_scoped_store(scope: StorageScope, store: Arc<dyn StorageArea>) {
    *slot(scope)
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(store);
}

/// Removes the store installed for `scope`, if any.
///
/// Facades constructed afterwards degrade to no-ops; facades that
/// already resolved the store keep their handle.
pub fn uninstall_scoped_store(scope: StorageScope) {
    slot(scope)
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}

/// Returns the store currently installed for `scope`, if any.
#[must_use]
pub fn resolve_scoped_store(scope: StorageScope) -> Option<Arc<dyn StorageArea>> {
    slot(scope)
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
