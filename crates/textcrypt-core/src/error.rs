//! Error types for message decoding and ciphertext files.

use std::path::PathBuf;

/// Errors produced when decoding a ciphertext.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// Ciphertext is empty or not a whole number of blocks.
    #[error("ciphertext length {0} is not a positive multiple of 16 bytes")]
    InvalidLength(usize),

    /// The final byte is not a pad length in `1..=16`.
    #[error("invalid padding byte {0:#04x} (wrong key or corrupted ciphertext)")]
    InvalidPadding(u8),
}

/// Errors produced by the ciphertext file store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
