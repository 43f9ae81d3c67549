//! Round transformations over the 4×4 state.
//!
//! The mixing step works on the four row groups `(i, 0..4)` of the state,
//! matching the way the key schedule's words are combined into it.

use crate::block::{xor_in_place, Block, State};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_left(row);
        state.set_row(row, values);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_right(row);
        state.set_row(row, values);
    }
}

/// Multiplies by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn mix_group(group: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *group;
    let t = a0 ^ a1 ^ a2 ^ a3;
    group[0] = a0 ^ t ^ xtime(a0 ^ a1);
    group[1] = a1 ^ t ^ xtime(a1 ^ a2);
    group[2] = a2 ^ t ^ xtime(a2 ^ a3);
    group[3] = a3 ^ t ^ xtime(a3 ^ a0);
}

// Folds the inverse matrix into a pre-step so the forward mix finishes the job.
fn inv_mix_group(group: &mut [u8; 4]) {
    let u = xtime(xtime(group[0] ^ group[2]));
    let v = xtime(xtime(group[1] ^ group[3]));
    group[0] ^= u;
    group[1] ^= v;
    group[2] ^= u;
    group[3] ^= v;
    mix_group(group);
}

/// MixColumns over all four groups.
#[inline]
pub fn mix_columns(state: &mut State) {
    for i in 0..4 {
        let mut group = state.row(i);
        mix_group(&mut group);
        state.set_row(i, group);
    }
}

/// Inverse MixColumns over all four groups.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for i in 0..4 {
        let mut group = state.row(i);
        inv_mix_group(&mut group);
        state.set_row(i, group);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    xor_in_place(state.bytes_mut(), round_key);
}
