//! Key provisioning, kept apart from console output.

use rand::distributions::Alphanumeric;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Length of generated text keys.
pub const TEXT_KEY_LEN: usize = 16;

/// Draws a random alphanumeric key for the hand-rolled cipher.
pub fn generate_text_key<R: RngCore>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(TEXT_KEY_LEN)
        .map(char::from)
        .collect()
}

/// ChaCha20 RNG, seeded from `seed` when given and from the OS otherwise.
pub fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_keys_are_sixteen_alphanumerics() {
        let mut rng = seeded_rng(Some(1));
        let key = generate_text_key(&mut rng);
        assert_eq!(key.len(), TEXT_KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_text_key(&mut seeded_rng(Some(42)));
        let b = generate_text_key(&mut seeded_rng(Some(42)));
        let c = generate_text_key(&mut seeded_rng(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
