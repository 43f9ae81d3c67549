use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use textcrypt_sealed::{open, seal, SealError, SealedMessage, SealingKey, HEADER_LEN};

#[test]
fn sealed_message_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sealed.bin");
    let mut rng = ChaCha20Rng::from_seed([11u8; 32]);

    let key = SealingKey::generate(&mut rng);
    let sealed = seal(&key, "the eagle has landed", &mut rng).expect("seal");
    sealed.write(&path).expect("write");

    let on_disk = std::fs::read(&path).expect("raw read");
    assert_eq!(on_disk.len(), HEADER_LEN + "the eagle has landed".len());

    let key = SealingKey::from_hex(&key.to_hex()).expect("hex key");
    let loaded = SealedMessage::read(&path).expect("read");
    assert_eq!(open(&key, &loaded).expect("open"), "the eagle has landed");
}

#[test]
fn corrupted_file_fails_authentication() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sealed.bin");
    let mut rng = ChaCha20Rng::from_seed([12u8; 32]);

    let key = SealingKey::generate(&mut rng);
    seal(&key, "payload", &mut rng)
        .expect("seal")
        .write(&path)
        .expect("write");

    let mut bytes = std::fs::read(&path).expect("raw read");
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    std::fs::write(&path, bytes).expect("raw write");

    let loaded = SealedMessage::read(&path).expect("read");
    assert!(matches!(
        open(&key, &loaded),
        Err(SealError::AuthenticationFailed)
    ));
}

#[test]
fn missing_file_is_a_store_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SealedMessage::read(dir.path().join("nope.bin")).expect_err("missing");
    assert!(matches!(err, SealError::Store(_)));
}
