//! Error types for CBC and CBC-CTS operations

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CtsError {
    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Invalid IV length (must match block size)")]
    InvalidIvLength,

    #[error("Input length is not a multiple of the block size")]
    UnalignedInput,

    #[error("Input too small (must be larger than one block)")]
    InputTooSmall,
}

pub type Result<T> = std::result::Result<T, CtsError>;
