//! Random 16-byte keys, shown to the operator as hex.

use rand::{CryptoRng, RngCore};

use crate::error::SealError;

/// Key length in bytes.
pub const KEY_LEN: usize = 16;

/// AES-128-EAX key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SealingKey(pub [u8; KEY_LEN]);

impl SealingKey {
    /// Draws a fresh key from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parses a key from 32 hex characters (surrounding whitespace ignored).
    pub fn from_hex(hex_str: &str) -> Result<Self, SealError> {
        let bytes = hex::decode(hex_str.trim())?;
        let key: [u8; KEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| SealError::KeyLength(bytes.len()))?;
        Ok(Self(key))
    }

    /// Lowercase hex encoding of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl core::fmt::Debug for SealingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SealingKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn hex_round_trip() {
        let key = SealingKey::generate(&mut ChaCha20Rng::from_seed([9u8; 32]));
        let text = key.to_hex();
        assert_eq!(text.len(), 32);
        assert_eq!(SealingKey::from_hex(&text).expect("parse"), key);
        assert_eq!(SealingKey::from_hex(&format!("  {text}\n")).expect("parse"), key);
    }

    #[test]
    fn rejects_non_hex() {
        let err = SealingKey::from_hex("not hex at all").expect_err("bad hex");
        assert!(matches!(err, SealError::KeyHex(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = SealingKey::from_hex("00112233").expect_err("short key");
        assert!(matches!(err, SealError::KeyLength(4)));
    }

    #[test]
    fn debug_hides_key_material() {
        let key = SealingKey([0xab; KEY_LEN]);
        assert!(!format!("{key:?}").contains("ab"));
    }
}
