//! BIP-39 mnemonic encoding, validation and seed derivation
//!
//! Converts entropy buffers to and from mnemonic word sequences with a
//! SHA-256 checksum, and derives 64-byte wallet seeds from phrases with
//! PBKDF2-HMAC-SHA512.

pub mod bits;
pub mod error;
pub mod language;
pub mod mnemonic;
pub mod seed;

pub use bits::BitView;
pub use error::{Error, Result};
pub use language::Language;
pub use mnemonic::{
    entropy_to_mnemonic, generate_mnemonic, mnemonic_to_entropy, validate, EntropyLength,
    Mnemonic,
};
pub use seed::{mnemonic_to_seed, phrase_to_seed, SEED_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
