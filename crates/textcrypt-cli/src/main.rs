//! Command-line interface for `textcrypt`.

#![forbid(unsafe_code)]

mod interactive;
mod keys;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use textcrypt_core::{read_ciphertext, write_ciphertext, BlockCipher};
use textcrypt_sealed::{open, seal, SealedMessage, SealingKey};
use tracing_subscriber::EnvFilter;

use crate::interactive::{Mode, Session};
use crate::keys::{generate_text_key, seeded_rng};

/// Text message encryption to and from files.
#[derive(Parser)]
#[command(
    name = "textcrypt",
    version,
    author,
    about = "Encrypt text messages into files with a hand-rolled block cipher or AES-EAX"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Optional RNG seed for reproducible key generation.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for messages, files and keys until told to stop (the default).
    Interactive {
        /// Use AES-128-EAX sealed files instead of the hand-rolled cipher.
        #[arg(long, default_value_t = false)]
        sealed: bool,
    },
    /// Encrypt a message into a raw ciphertext file.
    Encrypt {
        /// Message text.
        #[arg(long)]
        message: String,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Key text; a random 16-character key is generated when omitted.
        #[arg(long)]
        key: Option<String>,
    },
    /// Decrypt a raw ciphertext file.
    Decrypt {
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Key text used for encryption.
        #[arg(long)]
        key: String,
    },
    /// Seal a message with AES-128-EAX under a fresh random key.
    Seal {
        /// Message text.
        #[arg(long)]
        message: String,
        /// Output sealed file path.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Verify and open a sealed file.
    Open {
        /// Input sealed file path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command.unwrap_or(Commands::Interactive { sealed: false }) {
        Commands::Interactive { sealed } => cmd_interactive(sealed, cli.seed),
        Commands::Encrypt { message, out, key } => cmd_encrypt(&message, &out, key, cli.seed),
        Commands::Decrypt { input, key } => cmd_decrypt(&input, &key),
        Commands::Seal { message, out } => cmd_seal(&message, &out, cli.seed),
        Commands::Open { input, key_hex } => cmd_open(&input, &key_hex),
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn cmd_interactive(sealed: bool, seed: Option<u64>) -> Result<()> {
    let mode = if sealed { Mode::Sealed } else { Mode::Ecb };
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), seeded_rng(seed), mode);
    session.run()
}

fn cmd_encrypt(message: &str, out: &Path, key: Option<String>, seed: Option<u64>) -> Result<()> {
    let key = key.unwrap_or_else(|| generate_text_key(&mut seeded_rng(seed)));
    let ciphertext = BlockCipher::from_material(key.as_bytes()).encrypt(message);
    write_ciphertext(out, &ciphertext)?;
    println!("wrote {} bytes to {}", ciphertext.len(), out.display());
    println!("key: {key}");
    Ok(())
}

fn cmd_decrypt(input: &Path, key: &str) -> Result<()> {
    let ciphertext = read_ciphertext(input)?;
    let message = BlockCipher::from_material(key.as_bytes())
        .decrypt(&ciphertext)
        .with_context(|| format!("decrypt {}", input.display()))?;
    println!("{message}");
    Ok(())
}

fn cmd_seal(message: &str, out: &Path, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key = SealingKey::generate(&mut rng);
    let sealed = seal(&key, message, &mut rng)?;
    sealed.write(out)?;
    println!("wrote {} bytes to {}", sealed.to_bytes().len(), out.display());
    println!("key: {}", key.to_hex());
    Ok(())
}

fn cmd_open(input: &Path, key_hex: &str) -> Result<()> {
    let key = SealingKey::from_hex(key_hex).context("parse key")?;
    let sealed = SealedMessage::read(input)?;
    let message = open(&key, &sealed).with_context(|| format!("open {}", input.display()))?;
    println!("{message}");
    Ok(())
}
