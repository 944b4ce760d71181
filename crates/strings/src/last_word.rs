//! Length of the last word of a string.
//!
//! A word is a maximal run of characters other than the ASCII space. Tabs
//! and newlines are word characters.

const SPACE: char = ' ';

/// Number of `char`s in the last word of `s`, ignoring trailing spaces.
///
/// Returns 0 for the empty string or a string of only spaces.
pub fn length_of_last_word(s: &str) -> usize {
    s.chars()
        .rev()
        .skip_while(|&c| c == SPACE)
        .take_while(|&c| c != SPACE)
        .count()
}

/// The last word of `s`, or `None` when `s` holds no non-space character.
pub fn last_word(s: &str) -> Option<&str> {
    s.trim_end_matches(SPACE)
        .rsplit(SPACE)
        .next()
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_lengths() {
        assert_eq!(length_of_last_word(""), 0);
        assert_eq!(length_of_last_word("   "), 0);
        assert_eq!(length_of_last_word("a"), 1);
        assert_eq!(length_of_last_word("fly me to the moon"), 4);
        assert_eq!(length_of_last_word("  fly me   "), 2);
        assert_eq!(length_of_last_word("Hello World"), 5);
        assert_eq!(length_of_last_word("luffy is still joyboy"), 6);
    }

    #[test]
    fn only_ascii_space_separates() {
        assert_eq!(length_of_last_word("a\tb"), 3);
        assert_eq!(length_of_last_word("one two\n"), 4);
        // no-break space is a word character
        assert_eq!(length_of_last_word("a\u{a0}b"), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(length_of_last_word("grüße wörld "), 5);
        assert_eq!(last_word("grüße wörld "), Some("wörld"));
    }

    #[test]
    fn last_word_slices() {
        assert_eq!(last_word(""), None);
        assert_eq!(last_word("    "), None);
        assert_eq!(last_word("fly me to the moon  "), Some("moon"));
        assert_eq!(last_word("single"), Some("single"));
        assert_eq!(last_word("  lead"), Some("lead"));
    }

    proptest! {
        #[test]
        fn result_within_bounds(s in ".*") {
            prop_assert!(length_of_last_word(&s) <= s.chars().count());
        }

        #[test]
        fn trailing_space_is_ignored(s in "[a-z \t]{0,40}") {
            let padded = format!("{s} ");
            prop_assert_eq!(length_of_last_word(&s), length_of_last_word(&padded));
        }

        #[test]
        fn matches_split_reference(s in "[a-zé ]{0,40}") {
            let expected = s
                .split(' ')
                .filter(|w| !w.is_empty())
                .last()
                .map_or(0, |w| w.chars().count());
            prop_assert_eq!(length_of_last_word(&s), expected);
        }

        #[test]
        fn slice_agrees_with_length(s in "[a-z ]{0,40}") {
            prop_assert_eq!(
                last_word(&s).map_or(0, |w| w.chars().count()),
                length_of_last_word(&s)
            );
        }
    }
}
