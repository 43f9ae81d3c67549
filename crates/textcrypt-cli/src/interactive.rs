//! Prompt loop: encrypt or decrypt one message per pass until the operator stops.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::{CryptoRng, RngCore};
use textcrypt_core::{read_ciphertext, write_ciphertext, BlockCipher};
use textcrypt_sealed::{open, seal, SealedMessage, SealingKey};
use tracing::{info, warn};

use crate::keys::generate_text_key;

/// Which cipher the session uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Hand-rolled ECB codec with text keys.
    Ecb,
    /// AES-128-EAX with hex keys.
    Sealed,
}

enum Action {
    Encrypt,
    Decrypt,
    Invalid,
}

impl Action {
    fn parse(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "e" | "encrypt" => Self::Encrypt,
            "2" | "d" | "decrypt" => Self::Decrypt,
            _ => Self::Invalid,
        }
    }
}

/// One interactive session over arbitrary input and output streams.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    mode: Mode,
}

impl<I, O, R> Session<I, O, R>
where
    I: BufRead,
    O: Write,
    R: RngCore + CryptoRng,
{
    /// Creates a session.
    pub fn new(input: I, output: O, rng: R, mode: Mode) -> Self {
        Self {
            input,
            output,
            rng,
            mode,
        }
    }

    /// Runs until the operator declines another operation or input ends.
    ///
    /// Failed operations are reported and the loop carries on; only broken
    /// console streams end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "textcrypt ({})", self.mode_label())?;
        loop {
            let Some(answer) = self.ask("Encrypt a message (1) or decrypt a file (2)? ")? else {
                break;
            };
            let outcome = match Action::parse(&answer) {
                Action::Encrypt => self.encrypt_step(),
                Action::Decrypt => self.decrypt_step(),
                Action::Invalid => {
                    writeln!(self.output, "Invalid action.")?;
                    Ok(true)
                }
            };
            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    warn!(error = %err, "operation failed");
                    writeln!(self.output, "Error: {err:#}")?;
                }
            }

            let Some(again) = self.ask("Perform another operation? (y/n): ")? else {
                break;
            };
            if !matches!(again.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "s") {
                break;
            }
        }
        Ok(())
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::Ecb => "hand-rolled ECB",
            Mode::Sealed => "AES-128-EAX",
        }
    }

    // Ok(false) means input ended mid-operation.
    fn encrypt_step(&mut self) -> Result<bool> {
        let Some(message) = self.ask("Message to encrypt: ")? else {
            return Ok(false);
        };
        let Some(file) = self.ask("File to save the ciphertext to: ")? else {
            return Ok(false);
        };
        let file = file.trim().to_owned();

        let key_display = match self.mode {
            Mode::Ecb => {
                let key = generate_text_key(&mut self.rng);
                let ciphertext = BlockCipher::from_material(key.as_bytes()).encrypt(&message);
                write_ciphertext(&file, &ciphertext)?;
                key
            }
            Mode::Sealed => {
                let key = SealingKey::generate(&mut self.rng);
                seal(&key, &message, &mut self.rng)?.write(&file)?;
                key.to_hex()
            }
        };
        info!(file = %file, "saved encrypted message");
        writeln!(self.output, "Encrypted message saved to {file}")?;
        writeln!(self.output, "Decryption key (keep it safe): {key_display}")?;
        Ok(true)
    }

    fn decrypt_step(&mut self) -> Result<bool> {
        let Some(file) = self.ask("File containing the ciphertext: ")? else {
            return Ok(false);
        };
        let file = file.trim().to_owned();

        let message = match self.mode {
            Mode::Ecb => {
                let Some(key) = self.ask("Decryption key: ")? else {
                    return Ok(false);
                };
                let ciphertext = read_ciphertext(&file)?;
                BlockCipher::from_material(key.as_bytes())
                    .decrypt(&ciphertext)
                    .with_context(|| format!("decrypt {file}"))?
            }
            Mode::Sealed => {
                let Some(key_hex) = self.ask("Decryption key (hex): ")? else {
                    return Ok(false);
                };
                let key = SealingKey::from_hex(&key_hex)?;
                let sealed = SealedMessage::read(&file)?;
                open(&key, &sealed)?
            }
        };
        writeln!(self.output, "Decrypted message: {message}")?;
        Ok(true)
    }

    /// Prints `prompt` and reads one line without its line ending.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("read console input")? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
