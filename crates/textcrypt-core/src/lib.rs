//! Hand-rolled 128-bit block cipher and the ECB message codec built on it.
//!
//! This crate provides:
//! - Key normalization and the 44-word key schedule.
//! - The four round transformations and their inverses.
//! - Single-block encryption and decryption.
//! - Message padding, ECB block processing and raw ciphertext files.
//!
//! The cipher follows the AES-128 round structure, but its key words and
//! mixing step run along state rows, so its output is not FIPS-197
//! compatible. The implementation aims for clarity and testability rather
//! than constant-time guarantees; it should not be treated as side-channel
//! hardened, and ECB leaks repeated blocks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod codec;
mod error;
mod key;
mod round;
mod sbox;
mod store;

pub use crate::block::{index, Block, State, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, BlockCipher};
pub use crate::codec::{decrypt, decrypt_bytes, encrypt, pad, unpad};
pub use crate::error::{CodecError, StoreError};
pub use crate::key::{Aes128Key, RoundKeys, KEY_PAD_BYTE};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, xtime,
};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::store::{read_ciphertext, write_ciphertext};
