//! Message-level encoding: padding, ECB block processing and un-padding.
//!
//! Every block is enciphered independently, so equal plaintext blocks under
//! one key produce equal ciphertext blocks.

use tracing::{debug, warn};

use crate::block::{Block, BLOCK_LEN};
use crate::cipher::BlockCipher;
use crate::error::CodecError;

/// Appends `n` bytes of value `n`, where `n = 16 - len % 16` (always 1..=16).
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips the trailing pad named by the final byte.
pub fn unpad(mut data: Vec<u8>) -> Result<Vec<u8>, CodecError> {
    let Some(&last) = data.last() else {
        return Err(CodecError::InvalidLength(0));
    };
    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(CodecError::InvalidPadding(last));
    }
    data.truncate(data.len() - pad_len);
    Ok(data)
}

fn check_length(len: usize) -> Result<(), CodecError> {
    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(CodecError::InvalidLength(len));
    }
    Ok(())
}

impl BlockCipher {
    /// Pads and encrypts arbitrary bytes.
    pub fn encrypt_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut buffer = pad(data);
        for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
            let mut block: Block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&self.encrypt_block(&block));
        }
        debug!(
            plaintext_len = data.len(),
            ciphertext_len = buffer.len(),
            "encrypted message"
        );
        buffer
    }

    /// Decrypts and un-pads a ciphertext, returning raw bytes.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CodecError> {
        if let Err(err) = check_length(ciphertext.len()) {
            warn!(len = ciphertext.len(), "rejected ciphertext with bad length");
            return Err(err);
        }
        let mut buffer = ciphertext.to_vec();
        for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
            let mut block: Block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&self.decrypt_block(&block));
        }
        let plain = unpad(buffer)?;
        debug!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = plain.len(),
            "decrypted message"
        );
        Ok(plain)
    }

    /// Encrypts a text message.
    pub fn encrypt(&self, message: &str) -> Vec<u8> {
        self.encrypt_bytes(message.as_bytes())
    }

    /// Decrypts a text message. Invalid UTF-8 is replaced, not rejected.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<String, CodecError> {
        let plain = self.decrypt_bytes(ciphertext)?;
        Ok(String::from_utf8_lossy(&plain).into_owned())
    }
}

/// Encrypts `message` under normalized key material `key`.
pub fn encrypt(message: &str, key: &[u8]) -> Vec<u8> {
    BlockCipher::from_material(key).encrypt(message)
}

/// Decrypts `ciphertext` under normalized key material `key`.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<String, CodecError> {
    BlockCipher::from_material(key).decrypt(ciphertext)
}

/// Decrypts `ciphertext` without text decoding.
pub fn decrypt_bytes(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, CodecError> {
    BlockCipher::from_material(key).decrypt_bytes(ciphertext)
}
