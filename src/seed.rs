//! Seed derivation from mnemonic phrases
//!
//! The seed is PBKDF2-HMAC-SHA512 over the NFKD-normalized phrase with the
//! salt "mnemonic" + passphrase and 2048 rounds. The phrase is not checked
//! against a word table here; any phrase yields a seed, so wallets restored
//! from foreign or pre-standard phrases still derive the same keys.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

/// Length of a derived seed in bytes
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count
pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// Derive the 64-byte seed from a whitespace-separated phrase
pub fn phrase_to_seed(phrase: &str, passphrase: &str) -> [u8; SEED_LEN] {
    let mut password: String = phrase.nfkd().collect();
    let mut salt: String = SALT_PREFIX
        .chars()
        .chain(passphrase.chars())
        .nfkd()
        .collect();

    let mut seed = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );
    password.zeroize();
    salt.zeroize();
    seed
}

/// Derive the 64-byte seed from a word sequence
pub fn mnemonic_to_seed<S: AsRef<str>>(words: &[S], passphrase: &str) -> [u8; SEED_LEN] {
    let mut phrase = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word.as_ref());
    }
    let seed = phrase_to_seed(&phrase, passphrase);
    phrase.zeroize();
    seed
}
