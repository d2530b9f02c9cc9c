//! Key derivation from the caller-supplied secret.
//!
//! The raw secret is never handed to a cipher directly. Each algorithm
//! gets its own 32-byte key expanded with HKDF-SHA256 under a
//! domain-separation label, so the same secret configured with two
//! algorithms never reuses key material.

use hkdf::Hkdf;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::Algorithm;

/// Symmetric key material derived for one algorithm (256-bit).
///
/// # Security
///
/// - Zeroized on drop.
/// - Never logged or serialized; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct DerivedKey([u8; 32]);

impl DerivedKey {
    /// Expands the secret into a per-algorithm key.
    ///
    /// HKDF-SHA256 with no salt and the info label
    /// `sealbox:v1:key:{algorithm}`. Deterministic: the same secret and
    /// algorithm always produce the same key, which is what lets a new
    /// facade instance read records written by a previous one.
    pub(crate) fn derive(secret: &SecretString, algorithm: Algorithm) -> Self {
        let hk = Hkdf::<Sha256>::new(None, secret.expose_secret().as_bytes());
        let info = format!("sealbox:v1:key:{algorithm}");
        let mut okm = [0u8; 32];
        hk.expand(info.as_bytes(), &mut okm)
            .expect("32 bytes is a valid HKDF-SHA256 output length");
        Self(okm)
    }

    /// Returns the raw key bytes. Treat as sensitive material.
    pub(crate) const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
