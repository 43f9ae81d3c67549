//! Sealed-message error types.

use textcrypt_core::StoreError;

/// Errors produced by sealing, opening and parsing sealed messages.
#[derive(Debug, thiserror::Error)]
pub enum SealError {
    /// The tag did not verify: wrong key or modified data.
    #[error("incorrect key or corrupted message")]
    AuthenticationFailed,

    /// Sealed data is shorter than the nonce and tag header.
    #[error("sealed message is {0} bytes, shorter than the 32-byte header")]
    Truncated(usize),

    /// The key is not valid hexadecimal.
    #[error("key is not valid hexadecimal: {0}")]
    KeyHex(#[from] hex::FromHexError),

    /// The key decoded to the wrong number of bytes.
    #[error("key must be 16 bytes (32 hex characters), got {0} bytes")]
    KeyLength(usize),

    /// The cipher refused to encrypt.
    #[error("encryption failed")]
    Encrypt,

    /// File access failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
