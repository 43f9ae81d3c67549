//! Raw ciphertext files: the bytes as produced, no header, no key, no IV.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;

/// Writes `ciphertext` to `path`, replacing any existing file.
pub fn write_ciphertext(path: impl AsRef<Path>, ciphertext: &[u8]) -> Result<(), StoreError> {
    let path = path.as_ref();
    fs::write(path, ciphertext).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = ciphertext.len(), "wrote ciphertext");
    Ok(())
}

/// Reads the whole ciphertext stored at `path`.
pub fn read_ciphertext(path: impl AsRef<Path>) -> Result<Vec<u8>, StoreError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read ciphertext");
    Ok(bytes)
}
