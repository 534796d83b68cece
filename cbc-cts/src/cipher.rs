//! Generic block cipher trait

/// Trait for a keyed block cipher primitive.
///
/// An implementation transforms exactly one block per call and keeps no
/// chaining state between calls; any chaining is supplied by the modes built
/// on top of it. The key is part of the implementing value, so the
/// single-block operations are pure functions of the block contents.
pub trait BlockCipher {
    /// Returns the block size of the cipher in bytes
    fn block_size(&self) -> usize;

    /// Encrypts a single block in place
    ///
    /// `block` must be exactly [`block_size`](Self::block_size) bytes long.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts a single block in place
    ///
    /// `block` must be exactly [`block_size`](Self::block_size) bytes long.
    fn decrypt_block(&self, block: &mut [u8]);
}
