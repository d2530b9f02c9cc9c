//! Transparent encrypted key-value storage.
//!
//! `sealbox-core` layers confidentiality over a string key-value store:
//! every write is encrypted before it is persisted and every read is
//! decrypted on the way back, behind an interface that keeps the
//! substrate's semantics (length, key enumeration, clear).
//!
//! # Architecture
//!
//! The facade orchestrates four small components; no other component
//! holds cross-cutting state:
//!
//! 1. **Key namespacer** — derives the physical store key from the
//!    logical key and an optional prefix.
//! 2. **Value codec** ([`codec`]) — application values to and from the
//!    stored string form, with a raw-string decode fallback.
//! 3. **Cipher** — the [`Encryption`] capability from `sealbox-cipher`,
//!    selected by [`Algorithm`] and bound to the secret at construction.
//! 4. **Notification emitter** ([`notify`]) — reports every operation
//!    to an optional observer.
//!
//! The physical substrate is the [`store::StorageArea`] capability,
//! resolved per [`StorageScope`] from a process-global registry (or
//! injected explicitly). A scope with no installed store is not an
//! error: the facade degrades to no-ops, so the same code runs in
//! hosts with no storage at all.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sealbox_core::store::{self, MemoryStore};
//! use sealbox_core::{EncryptedStorage, SecretString, StorageOptions, StorageScope};
//!
//! store::install_scoped_store(StorageScope::Session, Arc::new(MemoryStore::new()));
//!
//! let storage = EncryptedStorage::new(
//!     SecretString::from(String::from("0123456789abcdef")),
//!     StorageOptions::default()
//!         .with_scope(StorageScope::Session)
//!         .with_prefix("app"),
//! )?;
//!
//! storage.set_item("user", &serde_json::json!({"id": 1}))?;
//! assert_eq!(storage.get_item("user")?, Some(serde_json::json!({"id": 1})));
//! # Ok::<(), sealbox_core::StorageError>(())
//! ```

pub mod codec;
mod config;
mod error;
mod facade;
mod namespace;
pub mod notify;
pub mod store;

pub use config::{StorageOptions, StorageScope, MIN_SECRET_KEY_LEN};
pub use error::{StorageError, StorageResult};
pub use facade::{
    EncryptedStorage, GetOptions, GetPatternOptions, PatternResult, RemovePatternOptions,
    SetOptions,
};
pub use notify::{NotifyHandler, StorageNotification};

// Re-exported so consumers can name the construction inputs without
// depending on the underlying crates directly.
pub use sealbox_cipher::{Algorithm, CipherError, Encryption};
pub use secrecy::SecretString;
