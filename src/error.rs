//! Error types for the seedwords library

use thiserror::Error;

/// Custom error type for mnemonic operations
#[derive(Error, Debug)]
pub enum Error {
    /// Entropy byte length, or mnemonic word count, outside the supported set
    #[error("Invalid entropy length: {0}")]
    InvalidEntropyLength(String),

    /// The injected randomness source failed to produce entropy
    #[error("Invalid entropy data: {0}")]
    InvalidEntropyData(String),

    /// Unknown word, checksum mismatch, or text normalization failure
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// A bit-range request outside the buffer or the supported width
    #[error("Invalid bit range: {0}")]
    InvalidBitRange(String),
}

/// Result type for mnemonic operations
pub type Result<T> = std::result::Result<T, Error>;
