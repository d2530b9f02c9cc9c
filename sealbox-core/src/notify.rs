//! Per-operation notifications.
//!
//! Every public facade operation reports what it did as a
//! [`StorageNotification`] delivered synchronously to an optional
//! [`NotifyHandler`]. The handler is a pure observer: its return value
//! is never consumed and its absence never alters control flow or
//! returned values. Handlers must not call back into the facade during
//! the callback; no reentrancy guard is provided.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// A typed description of one store operation.
///
/// `Set` carries the *plaintext encoded* value, never ciphertext, so
/// observers see what the application wrote rather than what landed on
/// disk. Serializes with an internal `type` tag for handlers that
/// forward events off-process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageNotification {
    /// The key count was observed.
    Length {
        /// Number of keys in the physical store.
        length: usize,
    },

    /// A value was written.
    Set {
        /// Logical key written to.
        key: String,
        /// Encoded plaintext that was persisted (possibly encrypted).
        value: String,
    },

    /// A single key was read.
    Get {
        /// Logical key read.
        key: String,
        /// Decoded value, or `None` when the key was absent.
        value: Option<Value>,
    },

    /// A pattern read returned its accumulated mapping.
    GetPattern {
        /// Logical keys that matched the pattern.
        keys: Vec<String>,
        /// Full mapping of logical key to decoded value.
        entries: BTreeMap<String, Value>,
    },

    /// A single key was deleted.
    Remove {
        /// Logical key removed.
        key: String,
    },

    /// A pattern removal is about to delete the listed keys.
    RemovePattern {
        /// Logical keys matched for deletion (emitted before deleting).
        keys: Vec<String>,
    },

    /// The store was cleared.
    Clear,

    /// A key was looked up by enumeration index.
    Key {
        /// Requested index.
        index: usize,
        /// Physical key at that index, or `None` out of range.
        key: Option<String>,
    },
}

/// Observer of store operations.
///
/// Implemented by any `Fn(&StorageNotification)` closure, so a handler
/// can be as small as `Arc::new(|event| println!("{event:?}"))`.
pub trait NotifyHandler: Send + Sync {
    /// Receives one operation notification.
    fn notify(&self, event: &StorageNotification);
}

impl<F> NotifyHandler for F
where
    F: Fn(&StorageNotification) + Send + Sync,
{
    fn notify(&self, event: &StorageNotification) {
        self(event);
    }
}

/// Stateless dispatcher owned by the facade.
#[derive(Clone, Default)]
pub(crate) struct Notifier {
    handler: Option<Arc<dyn NotifyHandler>>,
}

impl Notifier {
    pub(crate) const fn new(handler: Option<Arc<dyn NotifyHandler>>) -> Self {
        Self { handler }
    }

    /// Delivers the event to the handler, or drops it when none is set.
    pub(crate) fn emit(&self, event: StorageNotification) {
        if let Some(handler) = &self.handler {
            handler.notify(&event);
        }
    }
}
