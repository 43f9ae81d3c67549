//! Sealing, opening and the on-disk layout of sealed messages.
//!
//! File layout: `[nonce: 16 bytes][tag: 16 bytes][ciphertext: rest]`.

use std::path::Path;

use aes::Aes128;
use eax::aead::generic_array::GenericArray;
use eax::aead::{AeadInPlace, KeyInit};
use eax::Eax;
use rand::{CryptoRng, RngCore};
use textcrypt_core::{read_ciphertext, write_ciphertext};
use tracing::{debug, warn};

use crate::error::SealError;
use crate::key::SealingKey;

type Aes128Eax = Eax<Aes128>;

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 16;
/// Tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Length of the fixed header preceding the ciphertext.
pub const HEADER_LEN: usize = NONCE_LEN + TAG_LEN;

/// A sealed message: nonce, authentication tag and ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedMessage {
    /// Per-message nonce.
    pub nonce: [u8; NONCE_LEN],
    /// Authentication tag over the ciphertext.
    pub tag: [u8; TAG_LEN],
    /// Encrypted message bytes, same length as the plaintext.
    pub ciphertext: Vec<u8>,
}

impl SealedMessage {
    /// Serializes into the file layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parses the file layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SealError> {
        if bytes.len() < HEADER_LEN {
            return Err(SealError::Truncated(bytes.len()));
        }
        let (nonce, rest) = bytes.split_at(NONCE_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);
        let mut message = Self {
            nonce: [0u8; NONCE_LEN],
            tag: [0u8; TAG_LEN],
            ciphertext: ciphertext.to_vec(),
        };
        message.nonce.copy_from_slice(nonce);
        message.tag.copy_from_slice(tag);
        Ok(message)
    }

    /// Writes the message to `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SealError> {
        write_ciphertext(path, &self.to_bytes())?;
        Ok(())
    }

    /// Reads a message from `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SealError> {
        let bytes = read_ciphertext(path)?;
        Self::from_bytes(&bytes)
    }
}

/// Encrypts and authenticates `message` under `key` with a nonce drawn from `rng`.
pub fn seal<R: RngCore + CryptoRng>(
    key: &SealingKey,
    message: &str,
    rng: &mut R,
) -> Result<SealedMessage, SealError> {
    let cipher = Aes128Eax::new(GenericArray::from_slice(&key.0));
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let mut buffer = message.as_bytes().to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut buffer)
        .map_err(|_| SealError::Encrypt)?;

    let mut sealed = SealedMessage {
        nonce,
        tag: [0u8; TAG_LEN],
        ciphertext: buffer,
    };
    sealed.tag.copy_from_slice(&tag);
    debug!(len = sealed.ciphertext.len(), "sealed message");
    Ok(sealed)
}

/// Verifies and decrypts a sealed message.
///
/// Returns [`SealError::AuthenticationFailed`] rather than any plaintext when
/// the tag does not verify. Verified bytes that are not UTF-8 are replaced.
pub fn open(key: &SealingKey, sealed: &SealedMessage) -> Result<String, SealError> {
    let cipher = Aes128Eax::new(GenericArray::from_slice(&key.0));
    let mut buffer = sealed.ciphertext.clone();
    if cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&sealed.nonce),
            b"",
            &mut buffer,
            GenericArray::from_slice(&sealed.tag),
        )
        .is_err()
    {
        warn!("sealed message failed authentication");
        return Err(SealError::AuthenticationFailed);
    }
    debug!(len = buffer.len(), "opened sealed message");
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::from_seed([4u8; 32])
    }

    #[test]
    fn seal_then_open() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let sealed = seal(&key, "attack at dawn", &mut rng).expect("seal");
        assert_eq!(sealed.ciphertext.len(), "attack at dawn".len());
        assert_eq!(open(&key, &sealed).expect("open"), "attack at dawn");
    }

    #[test]
    fn empty_message_round_trip() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let sealed = seal(&key, "", &mut rng).expect("seal");
        assert_eq!(sealed.to_bytes().len(), HEADER_LEN);
        assert_eq!(open(&key, &sealed).expect("open"), "");
    }

    #[test]
    fn layout_is_nonce_tag_ciphertext() {
        let sealed = SealedMessage {
            nonce: [1u8; NONCE_LEN],
            tag: [2u8; TAG_LEN],
            ciphertext: vec![3, 3, 3],
        };
        let bytes = sealed.to_bytes();
        assert_eq!(bytes.len(), 35);
        assert_eq!(bytes[..16], [1u8; 16]);
        assert_eq!(bytes[16..32], [2u8; 16]);
        assert_eq!(bytes[32..], [3, 3, 3]);
        assert_eq!(SealedMessage::from_bytes(&bytes).expect("parse"), sealed);
    }

    #[test]
    fn short_input_is_truncated() {
        let err = SealedMessage::from_bytes(&[0u8; 31]).expect_err("short");
        assert!(matches!(err, SealError::Truncated(31)));
    }

    #[test]
    fn every_tag_and_ciphertext_bit_flip_is_detected() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let sealed = seal(&key, "tamper", &mut rng).expect("seal");

        for byte in 0..TAG_LEN {
            for bit in 0..8 {
                let mut tampered = sealed.clone();
                tampered.tag[byte] ^= 1 << bit;
                assert!(matches!(
                    open(&key, &tampered),
                    Err(SealError::AuthenticationFailed)
                ));
            }
        }
        for byte in 0..sealed.ciphertext.len() {
            for bit in 0..8 {
                let mut tampered = sealed.clone();
                tampered.ciphertext[byte] ^= 1 << bit;
                assert!(matches!(
                    open(&key, &tampered),
                    Err(SealError::AuthenticationFailed)
                ));
            }
        }
    }

    #[test]
    fn nonce_change_is_detected() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let mut sealed = seal(&key, "nonce", &mut rng).expect("seal");
        sealed.nonce[0] ^= 0x80;
        assert!(matches!(
            open(&key, &sealed),
            Err(SealError::AuthenticationFailed)
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let other = SealingKey::generate(&mut rng);
        let sealed = seal(&key, "secret", &mut rng).expect("seal");
        assert!(matches!(
            open(&other, &sealed),
            Err(SealError::AuthenticationFailed)
        ));
    }

    #[test]
    fn fresh_nonce_per_seal() {
        let mut rng = rng();
        let key = SealingKey::generate(&mut rng);
        let a = seal(&key, "same input", &mut rng).expect("seal");
        let b = seal(&key, "same input", &mut rng).expect("seal");
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.ciphertext, b.ciphertext);
    }
}
