//! CBC (Cipher Block Chaining) mode implementation

use crate::{error::CtsError, utils, BlockCipher, Result};

/// CBC mode encrypter.
///
/// Encrypts buffers whose length is a multiple of the block size, carrying
/// the chaining value from one call to the next. Successive calls on the
/// same instance continue a single logical stream:
///
/// Algorithm:
/// 1. C_0 = IV
/// 2. C_i = E(P_i ⊕ C_{i-1}) for i = 1, 2, ..., n
pub struct CbcEncrypter<'c, C: BlockCipher> {
    cipher: &'c C,
    chain: Vec<u8>,
}

impl<'c, C: BlockCipher> CbcEncrypter<'c, C> {
    /// Creates a CBC encrypter seeded with `iv`.
    ///
    /// `iv` must be exactly one block long.
    pub fn new(cipher: &'c C, iv: &[u8]) -> Result<Self> {
        if cipher.block_size() == 0 {
            return Err(CtsError::InvalidBlockSize);
        }

        if iv.len() != cipher.block_size() {
            return Err(CtsError::InvalidIvLength);
        }

        Ok(Self {
            cipher,
            chain: iv.to_vec(),
        })
    }

    /// Returns the block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.chain.len()
    }

    /// Encrypts `blocks` in place, advancing the chaining value.
    ///
    /// The buffer length must be a multiple of the block size.
    pub fn process(&mut self, blocks: &mut [u8]) -> Result<()> {
        let block_size = self.chain.len();

        if blocks.len() % block_size != 0 {
            return Err(CtsError::UnalignedInput);
        }

        for block in blocks.chunks_exact_mut(block_size) {
            utils::xor_in_place(block, &self.chain);
            self.cipher.encrypt_block(block);
            self.chain.copy_from_slice(block);
        }

        Ok(())
    }
}

/// CBC mode decrypter.
///
/// Mirror of [`CbcEncrypter`]: decrypts block-aligned buffers in place,
/// chaining across calls. Each ciphertext block is saved before it is
/// overwritten so that it can serve as the next chaining value.
pub struct CbcDecrypter<'c, C: BlockCipher> {
    cipher: &'c C,
    chain: Vec<u8>,
}

impl<'c, C: BlockCipher> CbcDecrypter<'c, C> {
    /// Creates a CBC decrypter seeded with `iv`.
    ///
    /// `iv` must be exactly one block long.
    pub fn new(cipher: &'c C, iv: &[u8]) -> Result<Self> {
        if cipher.block_size() == 0 {
            return Err(CtsError::InvalidBlockSize);
        }

        if iv.len() != cipher.block_size() {
            return Err(CtsError::InvalidIvLength);
        }

        Ok(Self {
            cipher,
            chain: iv.to_vec(),
        })
    }

    /// Returns the block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.chain.len()
    }

    /// Decrypts `blocks` in place, advancing the chaining value.
    ///
    /// The buffer length must be a multiple of the block size.
    pub fn process(&mut self, blocks: &mut [u8]) -> Result<()> {
        let block_size = self.chain.len();

        if blocks.len() % block_size != 0 {
            return Err(CtsError::UnalignedInput);
        }

        let mut saved = vec![0u8; block_size];

        for block in blocks.chunks_exact_mut(block_size) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block);
            utils::xor_in_place(block, &self.chain);
            std::mem::swap(&mut self.chain, &mut saved);
        }

        Ok(())
    }
}
