//! Key recovery on paragraphs of English prose.

use vigenere_decrypter::{break_vigenere, candidate_lengths, decrypt, encrypt, BreakConfig};

const HARBOR: &str = include_str!("harbor.txt");
const LIBRARY: &str = include_str!("library.txt");

fn letters(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect()
}

#[test]
fn recovers_five_letter_key() {
    let ciphertext = encrypt(HARBOR, "CRYPT").unwrap();
    let result = break_vigenere(&ciphertext, |_| {}).unwrap();
    assert_eq!(result.key, "CRYPT");
    assert_eq!(result.plaintext, HARBOR);
}

#[test]
fn recovers_key_from_short_paragraph() {
    let ciphertext = encrypt(LIBRARY, "lemon").unwrap();
    let result = break_vigenere(&ciphertext, |_| {}).unwrap();
    assert_eq!(result.key, "LEMON");
    assert_eq!(decrypt(&ciphertext, &result.key).unwrap(), LIBRARY);
}

#[test]
fn candidates_include_true_length_and_are_sorted() {
    let ciphertext = encrypt(HARBOR, "CRYPT").unwrap();
    let lengths = candidate_lengths(&letters(&ciphertext), &BreakConfig::default());
    assert!(lengths.contains(&5));
    assert!(lengths.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn repeated_key_resolves_to_shortest_period() {
    let ciphertext = encrypt(LIBRARY, "LEMONLEMON").unwrap();
    let result = break_vigenere(&ciphertext, |_| {}).unwrap();
    assert_eq!(result.key, "LEMON");
}
