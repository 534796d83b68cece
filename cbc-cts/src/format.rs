//! Transmission formats for CTS ciphertexts

/// Data transmission format of a CTS ciphertext.
///
/// The three standard variants differ only in how the final full block and
/// the final truncated block are ordered on the wire:
///
/// - [`Cs1`](Format::Cs1) keeps the natural order: the truncated block
///   precedes the final full block, so block-aligned data is bit-for-bit
///   compatible with plain (non-CTS) CBC.
/// - [`Cs3`](Format::Cs3) always places the final full block first; on
///   block-aligned data the last two blocks are swapped unconditionally,
///   which makes it incompatible with plain CBC even when no partial block
///   exists.
/// - [`Cs2`](Format::Cs2) is adaptive: it acts as `Cs1` on block-aligned
///   data and as `Cs3` otherwise. It therefore interoperates with `Cs1` on
///   aligned data and with `Cs3` on unaligned data. `Cs1` and `Cs3` never
///   interoperate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The truncated block precedes the final full block.
    Cs1,
    /// Adaptive: `Cs1` on aligned data, `Cs3` otherwise.
    Cs2,
    /// The final full block precedes the truncated block.
    Cs3,
}

impl Format {
    /// Whether a block-aligned message has its final two blocks exchanged.
    pub fn swaps_aligned_tail(self) -> bool {
        matches!(self, Format::Cs3)
    }

    /// Whether, on unaligned data, the final full block precedes the
    /// truncated block on the wire.
    pub fn full_block_first(self) -> bool {
        !matches!(self, Format::Cs1)
    }
}
