//! Symmetric string-encryption primitives for sealbox.
//!
//! This crate provides the encryption capability consumed by
//! `sealbox-core`: a small registry of AEAD algorithms, key derivation
//! from a caller-supplied secret, and a versioned string wire format so
//! ciphertext can live in a string-valued store.
//!
//! Consumer code depends only on the [`Encryption`] trait and the
//! [`build_cipher`] factory; the concrete cipher types and key material
//! never leave this crate.
//!
//! # Wire format
//!
//! Every encrypted record is `base64(version || nonce || ciphertext)`:
//!
//! 1. **Version** -- a single byte, currently `1`. Decryption rejects
//!    unknown versions up front rather than feeding garbage to the AEAD.
//! 2. **Nonce** -- freshly drawn from the OS RNG for every encryption
//!    (12 bytes for AES-256-GCM, 24 for XChaCha20-Poly1305).
//! 3. **Ciphertext** -- AEAD output including the authentication tag.
//!
//! The whole buffer is base64-encoded with the standard alphabet.

mod aead;
mod algorithm;
pub mod error;
mod keys;

pub use aead::{build_cipher, Encryption};
pub use algorithm::Algorithm;
pub use error::{CipherError, CipherResult};
