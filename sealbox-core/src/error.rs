//! Error types for the encrypted store facade.

use sealbox_cipher::CipherError;
use thiserror::Error;

use crate::config::MIN_SECRET_KEY_LEN;

/// Result type for encrypted store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the encrypted store facade.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The secret handed to the constructor is too short.
    ///
    /// Raised before any store interaction; no partial construction
    /// occurs.
    #[error("invalid secret key: {length} bytes is below the {MIN_SECRET_KEY_LEN}-byte minimum")]
    InvalidSecretKey {
        /// Length of the rejected secret, in bytes.
        length: usize,
    },

    /// A cipher operation failed (malformed ciphertext, tampered data,
    /// or wrong secret). Surfaced to the caller unrecovered.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Value serialization or typed deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
