//! AEAD cipher implementations and the string wire format.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::{rngs::OsRng, RngCore};
use secrecy::SecretString;

use crate::algorithm::Algorithm;
use crate::error::{CipherError, CipherResult};
use crate::keys::DerivedKey;

/// Wire format version emitted by [`Encryption::encrypt`].
const WIRE_VERSION: u8 = 1;

/// Nonce length for AES-256-GCM.
const GCM_NONCE_LEN: usize = 12;

/// Nonce length for XChaCha20-Poly1305.
const XCHACHA_NONCE_LEN: usize = 24;

/// Symmetric string encryption, as consumed by the encrypted store.
///
/// Implementations own their key material; callers never see raw keys.
/// Both operations are deterministic in their error behavior: `decrypt`
/// of anything that was not produced by `encrypt` under the same secret
/// and algorithm fails, it never returns garbage.
pub trait Encryption: Send + Sync {
    /// Encrypts a plaintext string into a base64 wire record.
    ///
    /// A fresh nonce is drawn per call, so encrypting the same plaintext
    /// twice yields different records.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EncryptionFailed`] if the AEAD refuses the
    /// operation.
    fn encrypt(&self, plaintext: &str) -> CipherResult<String>;

    /// Decrypts a wire record produced by [`Encryption::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedCiphertext`] when the record
    /// cannot be parsed, and [`CipherError::DecryptionFailed`] when
    /// authentication fails (tampered data or wrong secret).
    fn decrypt(&self, ciphertext: &str) -> CipherResult<String>;
}

/// Builds the encryption capability for an algorithm and secret.
///
/// The secret is expanded into per-algorithm key material (see
/// [`crate::keys`]); the returned cipher is the only place that material
/// lives.
#[must_use]
pub fn build_cipher(algorithm: Algorithm, secret: &SecretString) -> Box<dyn Encryption> {
    let key = DerivedKey::derive(secret, algorithm);
    match algorithm {
        Algorithm::Aes256Gcm => Box::new(Aes256GcmCipher::new(&key)),
        Algorithm::XChaCha20Poly1305 => Box::new(XChaChaCipher::new(&key)),
    }
}

struct Aes256GcmCipher {
    inner: Aes256Gcm,
}

impl Aes256GcmCipher {
    fn new(key: &DerivedKey) -> Self {
        Self {
            inner: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes())),
        }
    }
}

impl Encryption for Aes256GcmCipher {
    fn encrypt(&self, plaintext: &str) -> CipherResult<String> {
        let nonce = random_nonce::<GCM_NONCE_LEN>();
        let ciphertext = self
            .inner
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| CipherError::EncryptionFailed {
                context: "aes-256-gcm seal".to_owned(),
            })?;
        Ok(encode_record(&nonce, &ciphertext))
    }

    fn decrypt(&self, ciphertext: &str) -> CipherResult<String> {
        let (nonce, sealed) = decode_record(ciphertext, GCM_NONCE_LEN)?;
        let plaintext = self
            .inner
            .decrypt(Nonce::from_slice(&nonce), sealed.as_slice())
            .map_err(|_| CipherError::DecryptionFailed {
                context: "aes-256-gcm open (tampered data or wrong secret?)".to_owned(),
            })?;
        into_plaintext(plaintext)
    }
}

struct XChaChaCipher {
    inner: XChaCha20Poly1305,
}

impl XChaChaCipher {
    fn new(key: &DerivedKey) -> Self {
        Self {
            inner: XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key.as_bytes())),
        }
    }
}

impl Encryption for XChaChaCipher {
    fn encrypt(&self, plaintext: &str) -> CipherResult<String> {
        let nonce = random_nonce::<XCHACHA_NONCE_LEN>();
        let ciphertext = self
            .inner
            .encrypt(XNonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| CipherError::EncryptionFailed {
                context: "xchacha20-poly1305 seal".to_owned(),
            })?;
        Ok(encode_record(&nonce, &ciphertext))
    }

    fn decrypt(&self, ciphertext: &str) -> CipherResult<String> {
        let (nonce, sealed) = decode_record(ciphertext, XCHACHA_NONCE_LEN)?;
        let plaintext = self
            .inner
            .decrypt(XNonce::from_slice(&nonce), sealed.as_slice())
            .map_err(|_| CipherError::DecryptionFailed {
                context: "xchacha20-poly1305 open (tampered data or wrong secret?)".to_owned(),
            })?;
        into_plaintext(plaintext)
    }
}

fn random_nonce<const N: usize>() -> [u8; N] {
    let mut nonce = [0u8; N];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

fn encode_record(nonce: &[u8], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(1 + nonce.len() + ciphertext.len());
    raw.push(WIRE_VERSION);
    raw.extend_from_slice(nonce);
    raw.extend_from_slice(ciphertext);
    BASE64.encode(raw)
}

fn decode_record(record: &str, nonce_len: usize) -> CipherResult<(Vec<u8>, Vec<u8>)> {
    let raw = BASE64
        .decode(record)
        .map_err(|err| CipherError::MalformedCiphertext {
            context: format!("invalid base64: {err}"),
        })?;
    if raw.len() <= 1 + nonce_len {
        return Err(CipherError::MalformedCiphertext {
            context: format!("record too short: {} bytes", raw.len()),
        });
    }
    if raw[0] != WIRE_VERSION {
        return Err(CipherError::MalformedCiphertext {
            context: format!("unsupported wire version: {}", raw[0]),
        });
    }
    let nonce = raw[1..=nonce_len].to_vec();
    let sealed = raw[nonce_len + 1..].to_vec();
    Ok((nonce, sealed))
}

fn into_plaintext(bytes: Vec<u8>) -> CipherResult<String> {
    String::from_utf8(bytes).map_err(|_| CipherError::DecryptionFailed {
        context: "plaintext is not valid UTF-8".to_owned(),
    })
}
