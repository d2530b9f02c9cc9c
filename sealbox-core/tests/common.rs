//! Shared helpers for the integration suite.

use std::sync::{Arc, Mutex};

use sealbox_core::store::{MemoryStore, StorageArea};
use sealbox_core::{
    EncryptedStorage, NotifyHandler, SecretString, StorageNotification, StorageOptions,
};

/// Records every notification it receives, in order.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<StorageNotification>>,
}

impl Recorder {
    /// Drains and returns the recorded events.
    pub fn take(&self) -> Vec<StorageNotification> {
        std::mem::take(&mut self.events.lock().expect("lock"))
    }
}

impl NotifyHandler for Recorder {
    fn notify(&self, event: &StorageNotification) {
        self.events.lock().expect("lock").push(event.clone());
    }
}

/// The 10-byte secret used across the suite.
pub fn secret() -> SecretString {
    SecretString::from(String::from("abcdefghij"))
}

/// Builds a facade over a fresh in-memory store with a recording
/// handler attached.
pub fn harness(options: StorageOptions) -> (EncryptedStorage, Arc<MemoryStore>, Arc<Recorder>) {
    let store = Arc::new(MemoryStore::new());
    let recorder = Arc::new(Recorder::default());
    let storage = EncryptedStorage::with_store(
        secret(),
        options.with_notify_handler(Arc::<Recorder>::clone(&recorder)),
        Arc::<MemoryStore>::clone(&store) as Arc<dyn StorageArea>,
    )
    .expect("construct storage");
    (storage, store, recorder)
}
