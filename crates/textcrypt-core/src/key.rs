//! Key types for the block cipher.

use crate::block::{index, Block};

/// Byte appended to short key material until it reaches 16 bytes.
pub const KEY_PAD_BYTE: u8 = 0x01;

/// Normalized 16-byte cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Normalizes arbitrary key material into a 16-byte key.
    ///
    /// Material shorter than 16 bytes is right-padded with `0x01`; anything
    /// past the first 16 bytes is ignored.
    pub fn from_material(material: &[u8]) -> Self {
        let mut key = [KEY_PAD_BYTE; 16];
        let used = material.len().min(16);
        key[..used].copy_from_slice(&material[..used]);
        Self(key)
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl From<&str> for Aes128Key {
    fn from(value: &str) -> Self {
        Self::from_material(value.as_bytes())
    }
}

/// Expanded round keys: 11 round keys built from 44 four-byte words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Number of schedule words.
    pub const WORDS: usize = 44;

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns schedule word `i` (0..44).
    ///
    /// Word `4 * round + row` is the key material combined into state row `row`.
    pub fn word(&self, i: usize) -> [u8; 4] {
        let round_key = &self.0[i / 4];
        let row = i % 4;
        [
            round_key[index(row, 0)],
            round_key[index(row, 1)],
            round_key[index(row, 2)],
            round_key[index(row, 3)],
        ]
    }
}
