//! Mnemonic encoding, decoding and generation
//!
//! Entropy is encoded by appending the leading bits of its SHA-256 digest
//! as a checksum and slicing the combined bit string into 11-bit word
//! indices; decoding reverses the slicing and verifies the checksum.

use std::fmt;

use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::bits::BitView;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::seed;

/// Bits encoded by one mnemonic word
pub const WORD_BITS: usize = 11;

/// Supported entropy sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntropyLength {
    /// 128 bits (12 words)
    Bits128,
    /// 160 bits (15 words)
    Bits160,
    /// 192 bits (18 words)
    Bits192,
    /// 224 bits (21 words)
    Bits224,
    /// 256 bits (24 words)
    Bits256,
}

impl EntropyLength {
    /// All supported sizes, ascending
    pub const ALL: [EntropyLength; 5] = [
        EntropyLength::Bits128,
        EntropyLength::Bits160,
        EntropyLength::Bits192,
        EntropyLength::Bits224,
        EntropyLength::Bits256,
    ];

    /// Entropy size in bits
    pub fn bits(self) -> usize {
        match self {
            EntropyLength::Bits128 => 128,
            EntropyLength::Bits160 => 160,
            EntropyLength::Bits192 => 192,
            EntropyLength::Bits224 => 224,
            EntropyLength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes
    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Number of checksum bits appended before word-splitting
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Number of words in the resulting mnemonic
    pub fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / WORD_BITS
    }

    /// Look up the entropy size matching a bit count
    pub fn from_bits(bits: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|length| length.bits() == bits)
            .ok_or_else(|| Error::InvalidEntropyLength(format!("{bits} bits")))
    }

    /// Look up the entropy size producing a given word count
    pub fn from_word_count(count: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|length| length.word_count() == count)
            .ok_or_else(|| Error::InvalidEntropyLength(format!("{count} words")))
    }
}

/// Encode an entropy buffer as a mnemonic word sequence
pub fn entropy_to_mnemonic(entropy: &[u8], language: Language) -> Result<Vec<&'static str>> {
    let length = EntropyLength::from_bits(entropy.len() * 8)?;
    let checksum = Sha256::digest(entropy);

    // Append the full digest; slicing below only ever consumes the leading
    // checksum bits because word_count * 11 == bits + checksum_bits.
    let mut combined = entropy.to_vec();
    combined.extend_from_slice(checksum.as_slice());

    let indices = BitView::new(&combined).values_by_bits(WORD_BITS)?;
    let list = language.word_list();
    let words = indices[..length.word_count()]
        .iter()
        .map(|&index| list[usize::from(index)])
        .collect();
    combined.zeroize();
    Ok(words)
}

/// Decode a mnemonic word sequence back into its entropy, verifying the
/// checksum
pub fn mnemonic_to_entropy<S: AsRef<str>>(words: &[S], language: Language) -> Result<Vec<u8>> {
    let length = EntropyLength::from_word_count(words.len())?;

    // Repack the 11-bit word indices into one contiguous bit stream. An
    // unknown word fails immediately: dropping it would shift every later
    // bit and misreport the error as a checksum mismatch.
    let mut bitstream = vec![0u8; (words.len() * WORD_BITS).div_ceil(8)];
    for (position, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let index = language
            .index_of(word)
            .ok_or_else(|| Error::InvalidMnemonic(format!("unknown word {word:?}")))?;
        pack_bits(&mut bitstream, position * WORD_BITS, index);
    }

    let entropy_bits = length.bits();
    let checksum_bits = length.checksum_bits();
    let claimed = BitView::new(&bitstream).extract(entropy_bits, checksum_bits)?;

    let mut entropy = bitstream;
    entropy.truncate(entropy_bits / 8);
    let expected = u16::from(Sha256::digest(&entropy)[0]) >> (8 - checksum_bits);
    if claimed != expected {
        entropy.zeroize();
        return Err(Error::InvalidMnemonic("checksum mismatch".to_string()));
    }
    Ok(entropy)
}

/// Generate a new random mnemonic with the given entropy size
pub fn generate_mnemonic(
    length: EntropyLength,
    language: Language,
) -> Result<Vec<&'static str>> {
    let mut entropy = vec![0u8; length.byte_len()];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| Error::InvalidEntropyData(e.to_string()))?;
    tracing::debug!(
        bits = length.bits(),
        words = length.word_count(),
        "generating mnemonic"
    );
    let words = entropy_to_mnemonic(&entropy, language);
    entropy.zeroize();
    words
}

/// Validate a mnemonic phrase, checking word membership and checksum
pub fn validate(phrase: &str, language: Language) -> Result<()> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let mut entropy = mnemonic_to_entropy(&words, language)?;
    entropy.zeroize();
    Ok(())
}

/// Write an 11-bit value into `buf` starting at `bit_offset`, MSB first
fn pack_bits(buf: &mut [u8], bit_offset: usize, value: u16) {
    for i in 0..WORD_BITS {
        if (value >> (WORD_BITS - 1 - i)) & 1 == 1 {
            let bit = bit_offset + i;
            buf[bit / 8] |= 1 << (7 - bit % 8);
        }
    }
}

/// A validated mnemonic: an ordered word sequence plus its language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<&'static str>,
    language: Language,
}

impl Mnemonic {
    /// Generate a new random mnemonic
    pub fn generate(length: EntropyLength, language: Language) -> Result<Self> {
        let words = generate_mnemonic(length, language)?;
        Ok(Self { words, language })
    }

    /// Encode an entropy buffer
    pub fn from_entropy(entropy: &[u8], language: Language) -> Result<Self> {
        let words = entropy_to_mnemonic(entropy, language)?;
        Ok(Self { words, language })
    }

    /// Parse a whitespace-separated phrase, verifying words and checksum
    pub fn from_phrase(phrase: &str, language: Language) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let mut entropy = mnemonic_to_entropy(&words, language)?;
        entropy.zeroize();
        let words = words
            .iter()
            .map(|word| {
                // Lookup cannot fail after a successful decode.
                let index = language.index_of(word).unwrap_or_default();
                language.word_list()[usize::from(index)]
            })
            .collect();
        Ok(Self { words, language })
    }

    /// The language this mnemonic was resolved against
    pub fn language(&self) -> Language {
        self.language
    }

    /// The ordered words
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The space-joined phrase
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// Recover the entropy this mnemonic encodes
    pub fn to_entropy(&self) -> Result<Vec<u8>> {
        mnemonic_to_entropy(&self.words, self.language)
    }

    /// Derive the 64-byte seed for this mnemonic
    pub fn to_seed(&self, passphrase: &str) -> [u8; seed::SEED_LEN] {
        seed::mnemonic_to_seed(&self.words, passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
