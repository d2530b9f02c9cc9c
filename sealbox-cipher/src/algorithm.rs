//! Algorithm registry for the encryption capability.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{CipherError, CipherResult};

/// AEAD algorithms available to the encrypted store.
///
/// The string forms (`aes-256-gcm`, `xchacha20-poly1305`) are stable and
/// used both in configuration records and in key-derivation labels, so
/// renaming a variant is a breaking change for existing stores.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Algorithm {
    /// AES-256 in Galois/Counter Mode (12-byte nonce).
    #[default]
    #[strum(serialize = "aes-256-gcm")]
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,

    /// XChaCha20-Poly1305 (24-byte nonce).
    #[strum(serialize = "xchacha20-poly1305")]
    #[serde(rename = "xchacha20-poly1305")]
    XChaCha20Poly1305,
}

impl Algorithm {
    /// Resolves an algorithm by its stable string name.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::UnknownAlgorithm`] when the name does not
    /// match a registered algorithm.
    pub fn parse(name: &str) -> CipherResult<Self> {
        Self::from_str(name).map_err(|_| CipherError::UnknownAlgorithm {
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Algorithm::Aes256Gcm, "aes-256-gcm")]
    #[test_case(Algorithm::XChaCha20Poly1305, "xchacha20-poly1305")]
    fn name_round_trip(algorithm: Algorithm, name: &str) {
        assert_eq!(algorithm.to_string(), name);
        assert_eq!(Algorithm::parse(name).expect("parse"), algorithm);
    }

    #[test]
    fn unknown_name_is_rejected() {
        match Algorithm::parse("rot13") {
            Err(CipherError::UnknownAlgorithm { name }) => assert_eq!(name, "rot13"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn default_is_aes_gcm() {
        assert_eq!(Algorithm::default(), Algorithm::Aes256Gcm);
    }

    #[test]
    fn serde_uses_stable_names() {
        let json = serde_json::to_string(&Algorithm::XChaCha20Poly1305).expect("serialize");
        assert_eq!(json, "\"xchacha20-poly1305\"");
        let back: Algorithm = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Algorithm::XChaCha20Poly1305);
    }
}
