//! File encryption tool for AES-256 CBC in ciphertext stealing (CTS) mode
//!
//! Encrypts or decrypts a whole file in place-compatible fashion: the output
//! file is always exactly as long as the input file, whatever its length.

use clap::{Parser, ValueEnum};
use std::fs;

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

use cbc_cts::{BlockCipher, CtsDecrypter, CtsEncrypter, Format};

/// Command-line arguments for the CTS cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key for the cipher.
    #[arg(short, long, help = "AES-256 key as 64 hex digits")]
    key: String,

    /// Initialization vector.
    #[arg(short, long, help = "Initialization vector as 32 hex digits")]
    iv: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Ciphertext transmission format.
    #[arg(long, value_enum, default_value = "cs3", help = "Ciphertext transmission format")]
    format: CtsFormat,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

/// Enum representing the CTS ciphertext format.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CtsFormat {
    /// Truncated block first; CBC-compatible on aligned data.
    Cs1,
    /// Adaptive: CS1 on aligned data, CS3 otherwise.
    Cs2,
    /// Full block first; the Kerberos layout.
    Cs3,
}

impl From<CtsFormat> for Format {
    fn from(format: CtsFormat) -> Self {
        match format {
            CtsFormat::Cs1 => Format::Cs1,
            CtsFormat::Cs2 => Format::Cs2,
            CtsFormat::Cs3 => Format::Cs3,
        }
    }
}

/// AES-256 adapter for the generic block cipher trait.
struct Aes256Block(Aes256);

impl BlockCipher for Aes256Block {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        self.0.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        self.0.decrypt_block(GenericArray::from_mut_slice(block));
    }
}

fn main() {
    let cli: Cli = Cli::parse();

    let key: [u8; 32] = hex::decode(&cli.key)
        .expect("key must be hexadecimal")
        .try_into()
        .expect("key must be 64 hex digits (AES-256)");
    let iv = hex::decode(&cli.iv).expect("IV must be hexadecimal");

    let cipher = Aes256Block(Aes256::new(GenericArray::from_slice(&key)));

    let mut data = fs::read(&cli.file).expect("Failed to read the input file");

    let result = match cli.mode {
        OperationMode::Encrypt => CtsEncrypter::new(&cipher, &iv, cli.format.into())
            .and_then(|mut encrypter| encrypter.process(&mut data)),
        OperationMode::Decrypt => CtsDecrypter::new(&cipher, &iv, cli.format.into())
            .and_then(|mut decrypter| decrypter.process(&mut data)),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    fs::write(&cli.output, &data).expect("Failed to write the output file");
    println!("Wrote {} bytes to {}", data.len(), cli.output);
}
