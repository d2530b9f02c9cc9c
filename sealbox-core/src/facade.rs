//! The encrypted store facade.
//!
//! [`EncryptedStorage`] orchestrates the key namespacer, value codec,
//! cipher, and notification emitter around a [`StorageArea`]: every
//! public call resolves the physical key, performs the codec/cipher
//! transform, delegates to the store, and reports the logical operation
//! to the configured observer.
//!
//! The facade holds no mutable state beyond its configuration, the
//! cipher, and the resolved store handle. The caller's secret is
//! consumed at construction and lives on only as derived key material
//! inside the cipher — inspecting or serializing the facade can never
//! expose it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use sealbox_cipher::{build_cipher, Encryption};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec;
use crate::config::{StorageOptions, MIN_SECRET_KEY_LEN};
use crate::error::{StorageError, StorageResult};
use crate::namespace::KeyNamespace;
use crate::notify::{Notifier, StorageNotification};
use crate::store::{self, StorageArea};

/// Per-call options for [`EncryptedStorage::set_item_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptions {
    /// Store the encoded plaintext as-is for this write.
    pub skip_encryption: bool,
}

/// Per-call options for [`EncryptedStorage::get_item_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOptions {
    /// Treat the stored record as plaintext for this read.
    pub skip_decryption: bool,
}

/// Options for [`EncryptedStorage::remove_item_from_pattern`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemovePatternOptions {
    /// Match keys by equality with the namespaced pattern instead of by
    /// substring containment.
    pub exact: bool,
}

/// Options for [`EncryptedStorage::get_item_from_pattern`].
#[derive(Debug, Clone, Copy)]
pub struct GetPatternOptions {
    /// Collect every match into a mapping (`true`, the default) or
    /// return only the first match in store enumeration order.
    pub multiple: bool,
    /// Match keys by equality with the namespaced pattern instead of by
    /// substring containment.
    pub exact: bool,
    /// Treat the stored records as plaintext. Applies to every matched
    /// key, in both the single- and multiple-match paths.
    pub skip_decryption: bool,
}

impl Default for GetPatternOptions {
    fn default() -> Self {
        Self {
            multiple: true,
            exact: false,
            skip_decryption: false,
        }
    }
}

/// Result of a pattern read.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternResult {
    /// The first matching value (`multiple == false`).
    Single(Value),
    /// Mapping of logical key to value for every match
    /// (`multiple == true`).
    Many(BTreeMap<String, Value>),
}

/// Transparent encryption layer over a scoped key-value store.
///
/// Construction binds the secret to a cipher and resolves the physical
/// store for the configured scope; both are fixed for the facade's
/// lifetime. When no store is installed for the scope, every store
/// operation degrades to a no-op returning its default value — the
/// supported mode for headless execution contexts.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sealbox_core::store::MemoryStore;
/// use sealbox_core::{EncryptedStorage, SecretString, StorageOptions};
///
/// let storage = EncryptedStorage::with_store(
///     SecretString::from(String::from("abcdefghij")),
///     StorageOptions::default().with_prefix("app"),
///     Arc::new(MemoryStore::new()),
/// )?;
/// storage.set_item("user", &serde_json::json!({"id": 1}))?;
/// assert_eq!(
///     storage.get_item("user")?,
///     Some(serde_json::json!({"id": 1})),
/// );
/// # Ok::<(), sealbox_core::StorageError>(())
/// ```
pub struct EncryptedStorage {
    namespace: KeyNamespace,
    state_management: bool,
    skip_encryption: bool,
    cipher: Box<dyn Encryption>,
    store: Option<Arc<dyn StorageArea>>,
    notifier: Notifier,
}

impl EncryptedStorage {
    /// Creates a facade bound to the store installed for
    /// `options.scope`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSecretKey`] when the secret is
    /// shorter than [`MIN_SECRET_KEY_LEN`] bytes. The check runs before
    /// any store interaction.
    pub fn new(secret: SecretString, options: StorageOptions) -> StorageResult<Self> {
        validate_secret(&secret)?;
        let store = store::resolve_scoped_store(options.scope);
        Ok(Self::assemble(&secret, options, store))
    }

    /// Creates a facade over an explicitly provided store, bypassing
    /// the scope registry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSecretKey`] when the secret is
    /// shorter than [`MIN_SECRET_KEY_LEN`] bytes.
    pub fn with_store(
        secret: SecretString,
        options: StorageOptions,
        store: Arc<dyn StorageArea>,
    ) -> StorageResult<Self> {
        validate_secret(&secret)?;
        Ok(Self::assemble(&secret, options, Some(store)))
    }

    fn assemble(
        secret: &SecretString,
        options: StorageOptions,
        store: Option<Arc<dyn StorageArea>>,
    ) -> Self {
        tracing::debug!(
            scope = %options.scope,
            algorithm = %options.algorithm,
            prefix = %options.prefix,
            store_present = store.is_some(),
            "encrypted storage initialized"
        );
        Self {
            namespace: KeyNamespace::new(options.prefix),
            state_management: options.state_management,
            skip_encryption: options.skip_encryption,
            cipher: build_cipher(options.algorithm, secret),
            store,
            notifier: Notifier::new(options.notify_handler),
        }
    }

    /// Serializes `value` and writes it at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be serialized or the
    /// cipher refuses to encrypt.
    pub fn set_item<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        self.set_item_with(key, value, SetOptions::default())
    }

    /// [`Self::set_item`] with per-call options.
    ///
    /// The encryption bypass is effective when either the global
    /// `skip_encryption` option or the per-call flag is set. The `set`
    /// notification always carries the encoded plaintext, never the
    /// ciphertext.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be serialized or the
    /// cipher refuses to encrypt.
    pub fn set_item_with<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        options: SetOptions,
    ) -> StorageResult<()> {
        let Some(store) = self.store() else {
            return Ok(());
        };
        let encoded = codec::encode_serialize(value)?;
        let record = if self.skip_encryption || options.skip_encryption {
            encoded.clone()
        } else {
            self.cipher.encrypt(&encoded)?
        };
        store.set(&self.namespace.to_physical(key), &record);
        self.notifier.emit(StorageNotification::Set {
            key: key.to_owned(),
            value: encoded,
        });
        Ok(())
    }

    /// Reads and decodes the value at `key`.
    ///
    /// Returns `Ok(None)` for an absent key (a notification is still
    /// emitted). In state-management mode the decrypted string comes
    /// back as-is (`Value::String`) without JSON decoding.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored record cannot be decrypted.
    pub fn get_item(&self, key: &str) -> StorageResult<Option<Value>> {
        self.get_item_with(key, GetOptions::default())
    }

    /// [`Self::get_item`] with per-call options.
    ///
    /// The decryption bypass is effective when either the global
    /// `skip_encryption` option or the per-call flag is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored record cannot be decrypted.
    pub fn get_item_with(&self, key: &str, options: GetOptions) -> StorageResult<Option<Value>> {
        let Some(store) = self.store() else {
            return Ok(None);
        };
        let Some(raw) = store.get(&self.namespace.to_physical(key)) else {
            self.notifier.emit(StorageNotification::Get {
                key: key.to_owned(),
                value: None,
            });
            return Ok(None);
        };
        let plaintext = if self.skip_encryption || options.skip_decryption {
            raw
        } else {
            self.cipher.decrypt(&raw)?
        };
        let value = if self.state_management {
            Value::String(plaintext)
        } else {
            codec::decode(&plaintext)
        };
        self.notifier.emit(StorageNotification::Get {
            key: key.to_owned(),
            value: Some(value.clone()),
        });
        Ok(Some(value))
    }

    /// Reads the value at `key` and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored record cannot be decrypted or
    /// the decoded value does not deserialize into `T`.
    pub fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get_item(key)? {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Deletes the value at `key`. Idempotent.
    pub fn remove_item(&self, key: &str) {
        let Some(store) = self.store() else {
            return;
        };
        store.remove(&self.namespace.to_physical(key));
        self.notifier.emit(StorageNotification::Remove {
            key: key.to_owned(),
        });
    }

    /// Deletes every key matching `pattern`.
    ///
    /// Matching is by substring containment (plus prefix containment
    /// when a prefix is configured, so co-tenant namespaces in a shared
    /// store are never touched), or by namespaced equality with
    /// `exact`. When at least one key matches, a single
    /// `remove_pattern` notification listing the logical keys is
    /// emitted before deletion; zero matches are a silent no-op.
    pub fn remove_item_from_pattern(&self, pattern: &str, options: RemovePatternOptions) {
        let Some(store) = self.store() else {
            return;
        };
        let matched = self.matching_physical_keys(store.as_ref(), pattern, options.exact);
        if matched.is_empty() {
            return;
        }
        let keys = matched
            .iter()
            .map(|physical| self.namespace.from_physical(physical).to_owned())
            .collect();
        self.notifier.emit(StorageNotification::RemovePattern { keys });
        for physical in &matched {
            store.remove(physical);
        }
    }

    /// Reads every key matching `pattern` (same matching rule as
    /// [`Self::remove_item_from_pattern`]).
    ///
    /// Returns `Ok(None)` when nothing matches. With
    /// `multiple == false` the first match in store enumeration order
    /// is read through [`Self::get_item_with`] and returned as
    /// [`PatternResult::Single`]. Otherwise every match is accumulated
    /// into [`PatternResult::Many`] and one `get_pattern` notification
    /// carries the full mapping; a key deleted between the snapshot and
    /// the read contributes `Value::Null`. The decryption bypass
    /// applies to every matched key on both paths.
    ///
    /// # Errors
    ///
    /// Returns an error when a matched record cannot be decrypted.
    pub fn get_item_from_pattern(
        &self,
        pattern: &str,
        options: GetPatternOptions,
    ) -> StorageResult<Option<PatternResult>> {
        let Some(store) = self.store() else {
            return Ok(None);
        };
        let matched = self.matching_physical_keys(store.as_ref(), pattern, options.exact);
        if matched.is_empty() {
            return Ok(None);
        }
        let get_options = GetOptions {
            skip_decryption: options.skip_decryption,
        };

        if !options.multiple {
            let logical = self.namespace.from_physical(&matched[0]).to_owned();
            return Ok(self
                .get_item_with(&logical, get_options)?
                .map(PatternResult::Single));
        }

        let mut keys = Vec::with_capacity(matched.len());
        let mut entries = BTreeMap::new();
        for physical in &matched {
            let logical = self.namespace.from_physical(physical).to_owned();
            let value = self
                .get_item_with(&logical, get_options)?
                .unwrap_or(Value::Null);
            keys.push(logical.clone());
            entries.insert(logical, value);
        }
        self.notifier.emit(StorageNotification::GetPattern {
            keys,
            entries: entries.clone(),
        });
        Ok(Some(PatternResult::Many(entries)))
    }

    /// Deletes every key in the underlying store.
    pub fn clear(&self) {
        let Some(store) = self.store() else {
            return;
        };
        store.clear();
        self.notifier.emit(StorageNotification::Clear);
    }

    /// Returns the number of keys in the underlying store (0 without a
    /// store).
    ///
    /// Observation is itself observable: a `length` notification is
    /// emitted per call.
    #[must_use]
    pub fn len(&self) -> usize {
        let Some(store) = self.store() else {
            return 0;
        };
        let length = store.len();
        self.notifier.emit(StorageNotification::Length { length });
        length
    }

    /// Returns `true` when the underlying store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the *physical* (prefixed) key at `index` in store
    /// enumeration order, or `None` out of range — an intentional
    /// pass-through of store semantics.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<String> {
        let store = self.store()?;
        let key = store.key(index);
        self.notifier.emit(StorageNotification::Key {
            index,
            key: key.clone(),
        });
        key
    }

    /// Encrypts a raw string with this facade's cipher.
    ///
    /// No namespacing, no notification, no store interaction — a
    /// utility for out-of-band encryption needs.
    ///
    /// # Errors
    ///
    /// Returns an error when the cipher refuses to encrypt.
    pub fn encrypt_string(&self, plaintext: &str) -> StorageResult<String> {
        Ok(self.cipher.encrypt(plaintext)?)
    }

    /// Decrypts a raw string with this facade's cipher.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is malformed or authentication
    /// fails.
    pub fn decrypt_string(&self, ciphertext: &str) -> StorageResult<String> {
        Ok(self.cipher.decrypt(ciphertext)?)
    }

    /// JSON-serializes `value` and encrypts the result.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or encryption fails.
    pub fn encrypt_value<T: Serialize>(&self, value: &T) -> StorageResult<String> {
        let json = serde_json::to_string(value)?;
        Ok(self.cipher.encrypt(&json)?)
    }

    /// Decrypts `ciphertext` and JSON-parses the plaintext into `T`.
    ///
    /// Unlike store reads there is no raw-string fallback here: a
    /// plaintext that does not parse is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when decryption or parsing fails.
    pub fn decrypt_value<T: DeserializeOwned>(&self, ciphertext: &str) -> StorageResult<T> {
        let json = self.cipher.decrypt(ciphertext)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Writes several entries, delegating to [`Self::set_item`] per
    /// entry (each write emits its own notification).
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; earlier entries stay
    /// written.
    pub fn set_items(&self, entries: &[(&str, Value)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Reads several keys, delegating to [`Self::get_item`] per key.
    /// Absent keys are left out of the returned mapping.
    ///
    /// # Errors
    ///
    /// Returns the first decryption error encountered.
    pub fn get_items(&self, keys: &[&str]) -> StorageResult<BTreeMap<String, Value>> {
        let mut out = BTreeMap::new();
        for key in keys {
            if let Some(value) = self.get_item(key)? {
                out.insert((*key).to_owned(), value);
            }
        }
        Ok(out)
    }

    /// Deletes several keys, delegating to [`Self::remove_item`] per
    /// key.
    pub fn remove_items(&self, keys: &[&str]) {
        for key in keys {
            self.remove_item(key);
        }
    }

    /// Central null-check for the degrade-gracefully policy: every
    /// store-touching operation short-circuits through here.
    fn store(&self) -> Option<&Arc<dyn StorageArea>> {
        if self.store.is_none() {
            tracing::trace!("no store installed for this scope; operation is a no-op");
        }
        self.store.as_ref()
    }

    fn matching_physical_keys(
        &self,
        store: &dyn StorageArea,
        pattern: &str,
        exact: bool,
    ) -> Vec<String> {
        let namespaced = self.namespace.to_physical(pattern);
        let prefix = self.namespace.prefix();
        store
            .keys()
            .into_iter()
            .filter(|physical| {
                if exact {
                    *physical == namespaced
                } else {
                    physical.contains(pattern)
                        && (prefix.is_empty() || physical.contains(prefix))
                }
            })
            .collect()
    }
}

impl fmt::Debug for EncryptedStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedStorage")
            .field("namespace", &self.namespace)
            .field("state_management", &self.state_management)
            .field("skip_encryption", &self.skip_encryption)
            .field("store_present", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

fn validate_secret(secret: &SecretString) -> StorageResult<()> {
    let length = secret.expose_secret().len();
    if length < MIN_SECRET_KEY_LEN {
        return Err(StorageError::InvalidSecretKey { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::notify::NotifyHandler;
    use crate::store::MemoryStore;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<StorageNotification>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<StorageNotification> {
            std::mem::take(&mut self.events.lock().expect("lock"))
        }
    }

    impl NotifyHandler for Recorder {
        fn notify(&self, event: &StorageNotification) {
            self.events.lock().expect("lock").push(event.clone());
        }
    }

    fn secret() -> SecretString {
        SecretString::from(String::from("abcdefghij"))
    }

    fn harness(options: StorageOptions) -> (EncryptedStorage, Arc<MemoryStore>, Arc<Recorder>) {
        let store = Arc::new(MemoryStore::new());
        let recorder = Arc::new(Recorder::default());
        let storage = EncryptedStorage::with_store(
            secret(),
            options.with_notify_handler(Arc::<Recorder>::clone(&recorder)),
            Arc::<MemoryStore>::clone(&store) as Arc<dyn StorageArea>,
        )
        .expect("construct");
        (storage, store, recorder)
    }

    #[test]
    fn short_secret_is_rejected_before_any_store_interaction() {
        let store = Arc::new(MemoryStore::new());
        let result = EncryptedStorage::with_store(
            SecretString::from(String::from("short")),
            StorageOptions::default(),
            Arc::<MemoryStore>::clone(&store) as Arc<dyn StorageArea>,
        );
        match result {
            Err(StorageError::InvalidSecretKey { length }) => assert_eq!(length, 5),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn round_trip_stores_ciphertext_under_namespaced_key() {
        let (storage, store, _) = harness(StorageOptions::default().with_prefix("app"));
        storage.set_item("user", &json!({"id": 1})).expect("set");

        assert_eq!(store.len(), 1);
        let record = store.get("app:user").expect("record present");
        assert_ne!(record, r#"{"id":1}"#);

        assert_eq!(storage.get_item("user").expect("get"), Some(json!({"id": 1})));
    }

    #[test]
    fn set_event_carries_plaintext_not_ciphertext() {
        let (storage, _, recorder) = harness(StorageOptions::default());
        storage.set_item("user", &json!({"id": 1})).expect("set");
        assert_eq!(
            recorder.take(),
            vec![StorageNotification::Set {
                key: "user".to_owned(),
                value: r#"{"id":1}"#.to_owned(),
            }]
        );
    }

    #[test]
    fn global_bypass_stores_encoded_plaintext() {
        let (storage, store, _) = harness(StorageOptions::default().with_skip_encryption(true));
        storage.set_item("count", &json!(42)).expect("set");
        assert_eq!(store.get("count").as_deref(), Some("42"));
        assert_eq!(storage.get_item("count").expect("get"), Some(json!(42)));
    }

    #[test]
    fn per_call_bypass_round_trips() {
        let (storage, store, _) = harness(StorageOptions::default());
        storage
            .set_item_with("note", &json!("plain text"), SetOptions { skip_encryption: true })
            .expect("set");
        assert_eq!(store.get("note").as_deref(), Some("plain text"));

        let value = storage
            .get_item_with("note", GetOptions { skip_decryption: true })
            .expect("get");
        assert_eq!(value, Some(json!("plain text")));
    }

    #[test]
    fn state_management_returns_encoded_string() {
        let (storage, _, _) = harness(StorageOptions::default().with_state_management(true));
        storage.set_item("snapshot", &json!({"id": 1})).expect("set");
        assert_eq!(
            storage.get_item("snapshot").expect("get"),
            Some(json!(r#"{"id":1}"#))
        );
    }

    #[test]
    fn absent_key_returns_none_and_notifies_once() {
        let (storage, _, recorder) = harness(StorageOptions::default());
        assert_eq!(storage.get_item("missing").expect("get"), None);
        assert_eq!(
            recorder.take(),
            vec![StorageNotification::Get {
                key: "missing".to_owned(),
                value: None,
            }]
        );
    }

    #[test]
    fn remove_then_get_returns_none() {
        let (storage, _, recorder) = harness(StorageOptions::default());
        storage.set_item("user", &json!(1)).expect("set");
        storage.remove_item("user");
        assert_eq!(storage.get_item("user").expect("get"), None);
        storage.remove_item("user"); // idempotent

        let events = recorder.take();
        assert!(events.contains(&StorageNotification::Remove {
            key: "user".to_owned()
        }));
    }

    #[test]
    fn clear_empties_store_and_notifies() {
        let (storage, _, recorder) = harness(StorageOptions::default());
        storage.set_item("a", &json!(1)).expect("set");
        storage.set_item("b", &json!(2)).expect("set");
        storage.clear();

        assert_eq!(storage.len(), 0);
        assert_eq!(storage.get_item("a").expect("get"), None);
        assert!(recorder.take().contains(&StorageNotification::Clear));
    }

    #[test]
    fn len_emits_length_event() {
        let (storage, _, recorder) = harness(StorageOptions::default());
        storage.set_item("a", &json!(1)).expect("set");
        recorder.take();

        assert_eq!(storage.len(), 1);
        assert_eq!(
            recorder.take(),
            vec![StorageNotification::Length { length: 1 }]
        );
    }

    #[test]
    fn key_returns_physical_key() {
        let (storage, _, recorder) = harness(StorageOptions::default().with_prefix("app"));
        storage.set_item("user", &json!(1)).expect("set");
        recorder.take();

        assert_eq!(storage.key(0).as_deref(), Some("app:user"));
        assert_eq!(storage.key(1), None);
        assert_eq!(
            recorder.take(),
            vec![
                StorageNotification::Key {
                    index: 0,
                    key: Some("app:user".to_owned()),
                },
                StorageNotification::Key { index: 1, key: None },
            ]
        );
    }

    #[test]
    fn typed_getter_round_trips() {
        #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
        struct User {
            id: u32,
            name: String,
        }
        let (storage, _, _) = harness(StorageOptions::default());
        let user = User {
            id: 7,
            name: "ada".to_owned(),
        };
        storage.set_item("user", &user).expect("set");
        assert_eq!(storage.get_item_as::<User>("user").expect("get"), Some(user));
        assert_eq!(storage.get_item_as::<User>("missing").expect("get"), None);
    }

    #[test]
    fn decode_fallback_preserves_non_json_plaintext() {
        let (storage, store, _) = harness(StorageOptions::default());
        let record = storage.encrypt_string("not json {").expect("encrypt");
        store.set("legacy", &record);
        assert_eq!(
            storage.get_item("legacy").expect("get"),
            Some(json!("not json {"))
        );
    }

    #[test]
    fn tampered_record_surfaces_cipher_error() {
        let (storage, store, _) = harness(StorageOptions::default());
        storage.set_item("user", &json!(1)).expect("set");
        store.set("user", "bm90IGEgcmVhbCByZWNvcmQh");
        assert!(matches!(
            storage.get_item("user"),
            Err(StorageError::Cipher(_))
        ));
    }

    #[test]
    fn crypto_helpers_round_trip() {
        let (storage, _, recorder) = harness(StorageOptions::default());

        let sealed = storage.encrypt_string("hello").expect("encrypt");
        assert_eq!(storage.decrypt_string(&sealed).expect("decrypt"), "hello");

        let sealed = storage.encrypt_value(&json!({"id": 1})).expect("encrypt");
        let value: Value = storage.decrypt_value(&sealed).expect("decrypt");
        assert_eq!(value, json!({"id": 1}));

        // Out-of-band helpers never notify.
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn batch_operations_delegate_per_key() {
        let (storage, _, _) = harness(StorageOptions::default());
        storage
            .set_items(&[("a", json!(1)), ("b", json!("two"))])
            .expect("set");

        let values = storage.get_items(&["a", "b", "missing"]).expect("get");
        assert_eq!(values.len(), 2);
        assert_eq!(values["a"], json!(1));
        assert_eq!(values["b"], json!("two"));

        storage.remove_items(&["a", "b"]);
        assert_eq!(storage.len(), 0);
    }
}
