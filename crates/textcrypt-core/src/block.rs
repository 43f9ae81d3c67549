//! Block and state representation helpers.

/// Cipher block of 16 bytes.
pub type Block = [u8; 16];

/// Block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Maps a `(row, col)` cell of the 4×4 state onto its flat byte offset.
///
/// Blocks are loaded column-major, so `state[row][col] == block[row + 4 * col]`.
#[inline]
pub const fn index(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// The 4×4 cipher state, stored flat in block order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(Block);

impl State {
    /// Loads a block into the state.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Serializes the state back into a block.
    #[inline]
    pub fn to_block(self) -> Block {
        self.0
    }

    /// Reads the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[index(row, col)]
    }

    /// Writes the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[index(row, col)] = value;
    }

    /// Copies out one row of the state.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        [
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        ]
    }

    /// Overwrites one row of the state.
    #[inline]
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut Block {
        &mut self.0
    }
}
