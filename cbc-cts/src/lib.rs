//! # CBC-CTS Library
//!
//! This library implements CBC block cipher encryption and decryption in
//! ciphertext stealing (CTS) mode for cryptographic applications.
//!
//! CTS handles data that is not aligned to the cipher's block boundary --
//! i.e. arbitrary length data -- without growing the output: the ciphertext
//! is always exactly as long as the plaintext.
//!
//! ## Transmission formats
//!
//! - **CS1** - The truncated block precedes the final full block; compatible
//!   with plain CBC on block-aligned data
//! - **CS2** - Adaptive; acts as CS1 on aligned data and as CS3 otherwise
//! - **CS3** - The final full block precedes the truncated block; the layout
//!   used by Kerberos
//!
//! ## Usage
//!
//! ```rust
//! use cbc_cts::{CtsDecrypter, CtsEncrypter, DummyCipher, Format};
//!
//! // Create a cipher (replace with your AES implementation)
//! let cipher = DummyCipher::new(b"my-secret-key-16", 16);
//! let iv = b"initialization16";
//!
//! // Messages need not be aligned to the block size
//! let mut data = b"Hello, World! Any length works.".to_vec();
//! let original = data.clone();
//!
//! // Encrypt in place using CBC-CTS
//! let mut encrypter = CtsEncrypter::new(&cipher, iv, Format::Cs3)?;
//! encrypter.process(&mut data)?;
//! assert_eq!(data.len(), original.len());
//!
//! // Decrypt
//! let mut decrypter = CtsDecrypter::new(&cipher, iv, Format::Cs3)?;
//! decrypter.process(&mut data)?;
//! assert_eq!(data, original);
//! # Ok::<(), cbc_cts::CtsError>(())
//! ```
//!
//! ## Features
//!
//! - Generic [`BlockCipher`] trait for easy integration with any block cipher
//! - In-place processing; output length always equals input length
//! - Plain CBC codecs for block-aligned data, interoperable with CS1/CS2
//! - No authentication: CTS provides confidentiality chaining only, so
//!   callers needing tamper detection must add their own integrity layer

// Public modules
pub mod cipher;
pub mod error;
pub mod format;
pub mod modes;
pub mod utils;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use error::{CtsError, Result};
pub use format::Format;
pub use modes::{CbcDecrypter, CbcEncrypter, CtsDecrypter, CtsEncrypter};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dummy cipher implementation for testing and demonstration
///
/// This is a simple XOR-based "cipher" that should **never** be used in
/// production. It's only provided for exercising the cipher modes without
/// requiring a real cipher implementation.
///
/// # Example
///
/// ```rust
/// use cbc_cts::{BlockCipher, DummyCipher};
///
/// let cipher = DummyCipher::new(b"testkey1", 16);
/// assert_eq!(cipher.block_size(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct DummyCipher {
    key: Vec<u8>,
    block_size: usize,
}

impl DummyCipher {
    /// Create a new dummy cipher with the given key and block size
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn new(key: &[u8], block_size: usize) -> Self {
        assert!(!key.is_empty(), "key must not be empty");

        Self {
            key: key.to_vec(),
            block_size,
        }
    }
}

impl BlockCipher for DummyCipher {
    fn block_size(&self) -> usize {
        self.block_size
    }

    /// "Encrypt" a block by XORing it with the cycled key (testing only!)
    fn encrypt_block(&self, block: &mut [u8]) {
        for (b, k) in block.iter_mut().zip(self.key.iter().cycle()) {
            *b ^= k;
        }
    }

    /// "Decrypt" a block (identical to encryption for XOR)
    fn decrypt_block(&self, block: &mut [u8]) {
        self.encrypt_block(block);
    }
}
