//! Configuration for the encrypted store facade.
//!
//! A [`StorageOptions`] record is fixed at construction time; the facade
//! never mutates it afterwards. All fields have serde defaults so a
//! configuration can be deserialized from a partial document; the
//! notification handler is a runtime-only capability and is excluded
//! from (de)serialization.

use std::fmt;
use std::sync::Arc;

use sealbox_cipher::Algorithm;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::notify::NotifyHandler;

/// Minimum accepted secret length, in bytes.
pub const MIN_SECRET_KEY_LEN: usize = 10;

/// Which scoped store slot the facade binds to.
///
/// Mirrors the local/session split of browser storage: `Local` for data
/// that outlives the session, `Session` for data scoped to it. The
/// mapping from scope to an actual [`crate::store::StorageArea`] is the
/// host's responsibility (see [`crate::store::install_scoped_store`]).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum StorageScope {
    /// The persistent, session-independent store.
    #[default]
    #[strum(serialize = "local")]
    #[serde(rename = "local")]
    Local,

    /// The session-scoped store.
    #[strum(serialize = "session")]
    #[serde(rename = "session")]
    Session,
}

/// Immutable facade configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// Scoped store slot to bind to. Defaults to [`StorageScope::Local`].
    pub scope: StorageScope,

    /// Namespace prefix: a non-empty prefix turns logical key `k` into
    /// physical key `"{prefix}:k"`. Defaults to empty (no namespacing).
    pub prefix: String,

    /// When set, values read back from the store are returned as the
    /// raw decrypted string instead of being JSON-decoded; consumers
    /// that own their serialization (state-management snapshots) want
    /// the string untouched. Defaults to off.
    pub state_management: bool,

    /// Cipher used for records in this store. Defaults to AES-256-GCM.
    pub algorithm: Algorithm,

    /// Global encryption bypass: records are stored as encoded
    /// plaintext. Per-call flags can also bypass individual operations.
    /// Defaults to off.
    pub skip_encryption: bool,

    /// Observer invoked synchronously with every operation's
    /// notification. Absent by default; absence never changes behavior.
    #[serde(skip)]
    pub notify_handler: Option<Arc<dyn NotifyHandler>>,
}

impl StorageOptions {
    /// Returns options with the given scope.
    #[must_use]
    pub fn with_scope(mut self, scope: StorageScope) -> Self {
        self.scope = scope;
        self
    }

    /// Returns options with the given namespace prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns options with state-management mode switched on or off.
    #[must_use]
    pub const fn with_state_management(mut self, on: bool) -> Self {
        self.state_management = on;
        self
    }

    /// Returns options with the given cipher algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns options with the global encryption bypass switched on or
    /// off.
    #[must_use]
    pub const fn with_skip_encryption(mut self, on: bool) -> Self {
        self.skip_encryption = on;
        self
    }

    /// Returns options with the given notification handler installed.
    #[must_use]
    pub fn with_notify_handler(mut self, handler: Arc<dyn NotifyHandler>) -> Self {
        self.notify_handler = Some(handler);
        self
    }
}

impl fmt::Debug for StorageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageOptions")
            .field("scope", &self.scope)
            .field("prefix", &self.prefix)
            .field("state_management", &self.state_management)
            .field("algorithm", &self.algorithm)
            .field("skip_encryption", &self.skip_encryption)
            .field("notify_handler", &self.notify_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let options = StorageOptions::default();
        assert_eq!(options.scope, StorageScope::Local);
        assert_eq!(options.prefix, "");
        assert!(!options.state_management);
        assert_eq!(options.algorithm, Algorithm::Aes256Gcm);
        assert!(!options.skip_encryption);
        assert!(options.notify_handler.is_none());
    }

    #[test]
    fn deserializes_partial_document() {
        let options: StorageOptions = serde_json::from_str(
            r#"{"scope": "session", "prefix": "app", "algorithm": "xchacha20-poly1305"}"#,
        )
        .expect("deserialize");
        assert_eq!(options.scope, StorageScope::Session);
        assert_eq!(options.prefix, "app");
        assert_eq!(options.algorithm, Algorithm::XChaCha20Poly1305);
        assert!(!options.skip_encryption);
    }

    #[test]
    fn scope_names_round_trip() {
        assert_eq!(StorageScope::Local.to_string(), "local");
        assert_eq!(
            "session".parse::<StorageScope>().expect("parse"),
            StorageScope::Session
        );
    }

    #[test]
    fn debug_does_not_leak_handler() {
        let options =
            StorageOptions::default().with_notify_handler(Arc::new(|_: &crate::notify::StorageNotification| {}));
        let rendered = format!("{options:?}");
        assert!(rendered.contains("notify_handler: true"));
    }
}
