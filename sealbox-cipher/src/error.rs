//! Error types for the encryption primitives.

use thiserror::Error;

/// Result type for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;

/// Errors raised by the encryption capability.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The requested algorithm name is not registered.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },

    /// The ciphertext record cannot be parsed (bad base64, truncation,
    /// or an unsupported wire version).
    #[error("malformed ciphertext: {context}")]
    MalformedCiphertext {
        /// Description of the parse failure.
        context: String,
    },

    /// The AEAD refused to encrypt.
    #[error("encryption failed: {context}")]
    EncryptionFailed {
        /// Description of the failure.
        context: String,
    },

    /// Authentication failed: tampered ciphertext or wrong key.
    #[error("decryption failed: {context}")]
    DecryptionFailed {
        /// Description of the failure.
        context: String,
    },
}
