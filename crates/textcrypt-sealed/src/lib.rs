//! Authenticated alternative to the hand-rolled codec.
//!
//! Messages are sealed with AES-128-EAX from the RustCrypto crates and
//! stored as nonce, tag and ciphertext. Opening verifies the tag first and
//! reports [`SealError::AuthenticationFailed`] instead of returning data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod key;
mod message;

pub use crate::error::SealError;
pub use crate::key::{SealingKey, KEY_LEN};
pub use crate::message::{open, seal, SealedMessage, HEADER_LEN, NONCE_LEN, TAG_LEN};
