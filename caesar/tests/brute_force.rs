//! Brute-force recovery across shifts and inputs.

use caesar::{brute_force, decrypt, encrypt, rank_shifts};

const PARAGRAPH: &str = "When the tide goes out, the children run down to the water \
    and look for shells, which they carry home in their pockets. It is a small \
    town, and everyone knows that the best ones are found near the rocks.";

#[test]
fn recovers_every_shift_of_a_paragraph() {
    for shift in 0..26 {
        let key = shift.to_string();
        let ciphertext = encrypt(PARAGRAPH, &key);
        let best = brute_force(&ciphertext).unwrap();
        assert_eq!(best.shift, shift as u8, "shift {shift}");
        assert_eq!(best.text, PARAGRAPH);
        assert_eq!(decrypt(&ciphertext, &key), PARAGRAPH);
    }
}

#[test]
fn ranking_contains_every_shift_once() {
    let ranked = rank_shifts(&encrypt(PARAGRAPH, "11")).unwrap();
    let mut shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
    shifts.sort_unstable();
    assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
    assert!(ranked[0].score > ranked[1].score);
}
