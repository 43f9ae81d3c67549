use rand::{Rng, RngCore};
use textcrypt_core::{
    decrypt, encrypt, read_ciphertext, write_ciphertext, Aes128Key, BlockCipher, CodecError,
};

#[test]
fn message_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("secret.bin");

    let ciphertext = encrypt("meet me at the usual place", b"Zx81QpLm3RtY7vWc");
    write_ciphertext(&path, &ciphertext).expect("write");

    let stored = read_ciphertext(&path).expect("read");
    assert_eq!(stored, ciphertext);
    let message = decrypt(&stored, b"Zx81QpLm3RtY7vWc").expect("decrypt");
    assert_eq!(message, "meet me at the usual place");
}

#[test]
fn truncated_file_is_a_length_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cut.bin");

    let ciphertext = encrypt("a message spanning two blocks!", b"key");
    write_ciphertext(&path, &ciphertext[..ciphertext.len() - 3]).expect("write");

    let stored = read_ciphertext(&path).expect("read");
    assert_eq!(decrypt(&stored, b"key"), Err(CodecError::InvalidLength(29)));
}

#[test]
fn random_messages_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..80);
        let message: String = (0..len)
            .map(|_| char::from(rng.gen_range(0x20u8..0x7f)))
            .collect();
        let mut key = vec![0u8; rng.gen_range(0..24)];
        rng.fill_bytes(&mut key);

        let cipher = BlockCipher::new(&Aes128Key::from_material(&key));
        let ciphertext = cipher.encrypt(&message);
        assert!(!ciphertext.is_empty());
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(cipher.decrypt(&ciphertext).expect("decrypt"), message);
    }
}
