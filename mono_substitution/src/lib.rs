//! Monoalphabetic substitution cipher and solver
//!
//! With a known [`Key`], [`encrypt`] and [`decrypt`] are table lookups.
//! Without one, [`crack`] hill-climbs over keys: it proposes swapping two
//! letters of the current key, keeps the swap when the decryption scores
//! better under quadgram, trigram and common-word statistics, and restarts
//! from fresh keys to escape local maxima.
//!
//! Text is upper-cased on the way in. Letters outside A-Z (such as `Ä`)
//! come out as `?`.

pub mod key;
pub mod score;
pub mod search;

pub use key::Key;
pub use score::{score_plaintext, Prepared};
pub use search::{brute_force, crack, spawn_crack, CrackConfig, CrackResult};

/// Encrypts `plaintext` so that `key` decrypts it again.
pub fn encrypt(plaintext: &str, key: &Key) -> String {
    key.inverse().apply(&plaintext.to_uppercase())
}

/// Decrypts `ciphertext` with a known key.
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    key.apply(&ciphertext.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_round_trip() {
        let key: Key = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
        let ciphertext = encrypt("Meet me at noon, ok?", &key);
        assert_eq!(ciphertext, "ZCCE ZC KE YIIY, IR?");
        assert_eq!(decrypt(&ciphertext, &key), "MEET ME AT NOON, OK?");
    }

    #[test]
    fn test_decrypt_uses_key_positions() {
        let key: Key = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
        // Ciphertext A decrypts to the key's first letter.
        assert_eq!(decrypt("abc", &key), "QWE");
    }
}
