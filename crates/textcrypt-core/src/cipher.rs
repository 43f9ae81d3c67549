//! Key schedule and single-block encryption/decryption.

use crate::block::{index, Block, State};
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 128-bit key into 11 round keys.
///
/// The first four words hold the key laid out column-major: word `r` is
/// `(key[r], key[r + 4], key[r + 8], key[r + 12])`.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; RoundKeys::WORDS];
    for (r, word) in w.iter_mut().take(4).enumerate() {
        *word = core::array::from_fn(|c| key.0[index(r, c)]);
    }

    for i in 4..RoundKeys::WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for row in 0..4 {
            let word = w[round * 4 + row];
            for (col, byte) in word.into_iter().enumerate() {
                round_key[index(row, col)] = byte;
            }
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(10));
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.to_block()
}

/// Block cipher bound to one key, with its schedule expanded once.
#[derive(Clone, Debug)]
pub struct BlockCipher {
    round_keys: RoundKeys,
}

impl BlockCipher {
    /// Expands `key` and keeps the schedule for repeated use.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Normalizes raw key material (see [`Aes128Key::from_material`]) first.
    pub fn from_material(material: &[u8]) -> Self {
        Self::new(&Aes128Key::from_material(material))
    }

    /// The cached schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}
