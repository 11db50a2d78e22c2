//! Mock sentence generator for text columns.
//!
//! Produces runs of random Latin letters separated by single spaces, e.g.
//! `"xQ bRtz Lop aM"`. The output always has exactly the requested number of
//! characters, never starts or ends with a space, and never contains two
//! adjacent spaces.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Shortest letter run.
pub const MIN_WORD_LENGTH: usize = 1;

/// Longest letter run, except for the final run which absorbs the leftover.
pub const MAX_WORD_LENGTH: usize = 9;

/// Generate a mock sentence of exactly `length` characters.
pub fn generate_mock_sentence<R: Rng>(rng: &mut R, length: usize) -> String {
    let mut sentence = String::with_capacity(length);
    let mut remaining = length;

    while remaining > 0 {
        let word = rng.random_range(MIN_WORD_LENGTH..=MAX_WORD_LENGTH);
        // A separator is only written when at least one letter can follow it.
        if word + 1 < remaining {
            push_letters(rng, &mut sentence, word);
            sentence.push(' ');
            remaining -= word + 1;
        } else {
            push_letters(rng, &mut sentence, remaining);
            remaining = 0;
        }
    }

    sentence
}

fn push_letters<R: Rng>(rng: &mut R, out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(sentence: &str, length: usize) {
        assert_eq!(sentence.chars().count(), length, "{sentence:?}");
        assert!(
            sentence.chars().all(|c| c == ' ' || c.is_ascii_alphabetic()),
            "{sentence:?}"
        );
        assert!(!sentence.contains("  "), "{sentence:?}");
        if length > 0 {
            assert!(!sentence.starts_with(' '), "{sentence:?}");
            assert!(!sentence.ends_with(' '), "{sentence:?}");
        }
    }

    #[test]
    fn test_exact_length_small_targets() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in 0..=20 {
            for _ in 0..50 {
                let sentence = generate_mock_sentence(&mut rng, length);
                assert_well_formed(&sentence, length);
            }
        }
    }

    #[test]
    fn test_exact_length_larger_targets() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [50, 100, 255, 4000, 30_000] {
            let sentence = generate_mock_sentence(&mut rng, length);
            assert_well_formed(&sentence, length);
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_mock_sentence(&mut rng, 0), "");
    }

    #[test]
    fn test_words_are_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let sentence = generate_mock_sentence(&mut rng, 2000);
        let words: Vec<&str> = sentence.split(' ').collect();

        assert!(words.len() > 1);
        let (last, rest) = words.split_last().unwrap();
        for word in rest {
            assert!((MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()), "{word:?}");
        }
        // The final run takes the leftover, which is at most one word plus the unused separator.
        assert!((1..=MAX_WORD_LENGTH + 1).contains(&last.len()));
    }

    #[test]
    fn test_produces_separators() {
        let mut rng = StdRng::seed_from_u64(11);
        let sentence = generate_mock_sentence(&mut rng, 200);
        assert!(sentence.contains(' '));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        assert_eq!(
            generate_mock_sentence(&mut rng1, 80),
            generate_mock_sentence(&mut rng2, 80)
        );
    }
}
