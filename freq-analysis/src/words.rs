//! Common English word lists and word-level scoring

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Short function words used to rank Caesar candidates.
pub const SHIFT_WORDS: [&str; 25] = [
    "the", "and", "is", "a", "to", "of", "in", "for", "it", "that", "with", "be", "on", "as",
    "this", "are", "have", "has", "go", "when", "not", "had", "by", "so", "which",
];

const COMMON_WORD_LIST: [&str; 102] = [
    "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I", "IT", "FOR", "NOT", "ON",
    "ARE", "WITH", "HE", "AS", "YOU", "DO", "AT", "THIS", "BUT", "HIS", "BY", "FROM", "THEY",
    "WE", "SAY", "HER", "SHE", "OR", "AN", "WILL", "MY", "ONE", "ALL", "WOULD", "THERE", "THEIR",
    "WHAT", "SO", "UP", "OUT", "IF", "ABOUT", "WHO", "GET", "WHICH", "GO", "ME", "WHEN", "MAKE",
    "CAN", "LIKE", "TIME", "NO", "JUST", "HIM", "KNOW", "TAKE", "PEOPLE", "INTO", "YEAR", "YOUR",
    "GOOD", "SOME", "COULD", "THEM", "SEE", "OTHER", "THAN", "THEN", "NOW", "LOOK", "ONLY",
    "COME", "ITS", "OVER", "THINK", "ALSO", "BACK", "AFTER", "USE", "TWO", "HOW", "OUR", "WORK",
    "FIRST", "WELL", "WAY", "EVEN", "NEW", "WANT", "BECAUSE", "ANY", "THESE", "GIVE", "DAY",
    "MOST", "US", "THOSE",
];

lazy_static! {
    /// About a hundred of the most common English words, upper case.
    pub static ref COMMON_WORDS: HashSet<&'static str> = COMMON_WORD_LIST.iter().copied().collect();
}

/// Counts whole-word occurrences of `words` in `text`, ignoring case.
///
/// Words are maximal runs of ASCII letters, digits and underscores, so
/// `"the"` matches in `"(the)"` but not in `"other"`.
pub fn count_word_matches(text: &str, words: &[&str]) -> usize {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty() && words.contains(token))
        .count()
}

/// Share of whitespace-separated tokens of upper-case `text` that are
/// common English words once leading and trailing non-letters are removed.
pub fn common_word_ratio(text: &str) -> f64 {
    let mut tokens = 0usize;
    let mut hits = 0usize;
    for token in text.split_whitespace() {
        tokens += 1;
        let word = token.trim_matches(|c: char| !c.is_ascii_uppercase());
        if COMMON_WORDS.contains(word) {
            hits += 1;
        }
    }
    hits as f64 / tokens.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_sizes() {
        assert_eq!(COMMON_WORDS.len(), COMMON_WORD_LIST.len());
        assert!(COMMON_WORDS.contains("THOSE"));
    }

    #[test]
    fn test_count_word_matches_respects_boundaries() {
        assert_eq!(count_word_matches("The other theme (the end)", &SHIFT_WORDS), 2);
        assert_eq!(count_word_matches("A cat is on a mat", &SHIFT_WORDS), 4);
        assert_eq!(count_word_matches("the_end isn't", &SHIFT_WORDS), 0);
        assert_eq!(count_word_matches("", &SHIFT_WORDS), 0);
    }

    #[test]
    fn test_common_word_ratio() {
        assert_eq!(common_word_ratio("THE CAT, AND (THE) DOG."), 0.6);
        assert_eq!(common_word_ratio(""), 0.0);
        assert_eq!(common_word_ratio("the lower case"), 0.0);
        assert_eq!(common_word_ratio("\"IT\" 42"), 0.5);
    }
}
