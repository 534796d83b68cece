//! CBC-CTS (Ciphertext Stealing) mode implementation
//!
//! CTS extends CBC to inputs of arbitrary byte length without growing the
//! output. The input is split into an aligned prefix, which is chained
//! normally, and a tail of one full block plus one partial block. The
//! partial block is zero-padded and chained as usual, but only a truncated
//! piece of the penultimate ciphertext block goes on the wire: its missing
//! tail bytes are recoverable from the final block during decryption, so
//! they are "stolen" and the total length is preserved.
//!
//! The [`Format`] chosen at construction decides how the final two blocks
//! are ordered; see the format documentation for the compatibility rules.

use crate::{error::CtsError, BlockCipher, Format, Result};

use super::{CbcDecrypter, CbcEncrypter};

/// CBC-CTS mode encrypter.
///
/// Handles plaintext of any length above one block (block-aligned plaintext
/// of any length under [`Format::Cs1`] and [`Format::Cs2`]). The chaining
/// value advances across calls exactly as in plain CBC.
pub struct CtsEncrypter<'c, C: BlockCipher> {
    cbc: CbcEncrypter<'c, C>,
    format: Format,
}

impl<'c, C: BlockCipher> CtsEncrypter<'c, C> {
    /// Creates a CBC-CTS encrypter seeded with `iv`.
    ///
    /// `iv` must be exactly one block long.
    pub fn new(cipher: &'c C, iv: &[u8], format: Format) -> Result<Self> {
        Ok(Self {
            cbc: CbcEncrypter::new(cipher, iv)?,
            format,
        })
    }

    /// Returns the block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.cbc.block_size()
    }

    /// Encrypts `buf` in place.
    ///
    /// The output occupies exactly the input range; no padding is appended.
    /// Fails with [`CtsError::InputTooSmall`] if `buf` is shorter than one
    /// full block plus one byte while unaligned, or shorter than two blocks
    /// while aligned under [`Format::Cs3`]. Nothing is written on failure.
    pub fn process(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        let leftover = buf.len() % block_size;

        if leftover == 0 {
            self.process_aligned(buf)
        } else {
            self.process_unaligned(buf, leftover)
        }
    }

    /// Block-aligned input: plain CBC, then the format's final-block order.
    fn process_aligned(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();

        if self.format.swaps_aligned_tail() && buf.len() < 2 * block_size {
            return Err(CtsError::InputTooSmall);
        }

        self.cbc.process(buf)?;

        if self.format.swaps_aligned_tail() {
            let tail_start = buf.len() - 2 * block_size;
            let (last_full, last) = buf[tail_start..].split_at_mut(block_size);
            last_full.swap_with_slice(last);
        }

        Ok(())
    }

    /// Unaligned input: chain the prefix, then steal from the final blocks.
    fn process_unaligned(&mut self, buf: &mut [u8], leftover: usize) -> Result<()> {
        let block_size = self.block_size();

        // Everything before the last full-plus-partial block pair is chained
        // as usual. A negative start means there is no full block to steal
        // from.
        let tail_start = buf
            .len()
            .checked_sub(block_size + leftover)
            .ok_or(CtsError::InputTooSmall)?;

        let (head, tail) = buf.split_at_mut(tail_start);
        self.cbc.process(head)?;

        // Chain the tail in a two-block scratch buffer, with the partial
        // plaintext block zero-padded to a full block.
        let mut scratch = vec![0u8; 2 * block_size];
        scratch[..block_size + leftover].copy_from_slice(tail);
        self.cbc.process(&mut scratch)?;

        // `donor` is the chained ciphertext of the last full plaintext
        // block; only its first `leftover` bytes are transmitted. `last` is
        // the encryption of donor XOR the padded partial block and is
        // transmitted whole -- it is what lets the decrypter recover the
        // donor's stolen tail.
        let (donor, last) = scratch.split_at(block_size);

        if self.format.full_block_first() {
            tail[..block_size].copy_from_slice(last);
            tail[block_size..].copy_from_slice(&donor[..leftover]);
        } else {
            tail[..leftover].copy_from_slice(&donor[..leftover]);
            tail[leftover..].copy_from_slice(last);
        }

        Ok(())
    }
}

/// CBC-CTS mode decrypter.
///
/// Mirror of [`CtsEncrypter`]. Besides the chained codec it uses the block
/// cipher directly: one single-block decryption of the final ciphertext
/// block reveals the bytes that were stolen from the truncated block.
pub struct CtsDecrypter<'c, C: BlockCipher> {
    cipher: &'c C,
    cbc: CbcDecrypter<'c, C>,
    format: Format,
}

impl<'c, C: BlockCipher> CtsDecrypter<'c, C> {
    /// Creates a CBC-CTS decrypter seeded with `iv`.
    ///
    /// `iv` must be exactly one block long.
    pub fn new(cipher: &'c C, iv: &[u8], format: Format) -> Result<Self> {
        Ok(Self {
            cipher,
            cbc: CbcDecrypter::new(cipher, iv)?,
            format,
        })
    }

    /// Returns the block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.cbc.block_size()
    }

    /// Decrypts `buf` in place.
    ///
    /// Accepts exactly the lengths the encrypter produces and fails with
    /// the same size errors. Nothing is written on failure.
    ///
    /// Note that CTS provides no integrity protection: decrypting corrupted
    /// ciphertext succeeds and silently yields wrong plaintext.
    pub fn process(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        let leftover = buf.len() % block_size;

        if leftover == 0 {
            self.process_aligned(buf)
        } else {
            self.process_unaligned(buf, leftover)
        }
    }

    /// Block-aligned input: undo the format's final-block order, then CBC.
    fn process_aligned(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();

        if self.format.swaps_aligned_tail() {
            if buf.len() < 2 * block_size {
                return Err(CtsError::InputTooSmall);
            }
            let tail_start = buf.len() - 2 * block_size;
            let (last_full, last) = buf[tail_start..].split_at_mut(block_size);
            last_full.swap_with_slice(last);
        }

        self.cbc.process(buf)
    }

    /// Unaligned input: chain the prefix, then rebuild and decrypt the tail.
    fn process_unaligned(&mut self, buf: &mut [u8], leftover: usize) -> Result<()> {
        let block_size = self.block_size();

        let tail_start = buf
            .len()
            .checked_sub(block_size + leftover)
            .ok_or(CtsError::InputTooSmall)?;

        let (head, tail) = buf.split_at_mut(tail_start);
        self.cbc.process(head)?;

        // Reassemble the true ciphertext order in a two-block scratch
        // buffer: the truncated donor block first, the final full block
        // second, regardless of how the format ordered them on the wire.
        let mut scratch = vec![0u8; 2 * block_size];
        if self.format.full_block_first() {
            scratch[..leftover].copy_from_slice(&tail[block_size..]);
            scratch[block_size..].copy_from_slice(&tail[..block_size]);
        } else {
            scratch[..leftover].copy_from_slice(&tail[..leftover]);
            scratch[block_size..].copy_from_slice(&tail[leftover..]);
        }

        // A raw single-block decryption of the final block yields the padded
        // partial plaintext XOR the donor block. The plaintext padding is
        // zero, so the positions past `leftover` are the donor's stolen tail
        // bytes verbatim.
        let mut stolen = scratch[block_size..].to_vec();
        self.cipher.decrypt_block(&mut stolen);
        scratch[leftover..block_size].copy_from_slice(&stolen[leftover..]);

        self.cbc.process(&mut scratch)?;
        tail.copy_from_slice(&scratch[..block_size + leftover]);

        Ok(())
    }
}
