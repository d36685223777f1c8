//! Reading-time estimation for article content.
//!
//! A single pure function over the raw markdown text, shown on article pages
//! next to the publication date. The estimate is deliberately crude: words
//! are whitespace-separated runs, read at a fixed 200 words per minute, and
//! every article takes at least a minute. No locale awareness and no special
//! handling for scripts without word spacing.

/// Average adult reading speed used for the estimate.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Estimated reading time in whole minutes, never less than 1.
///
/// - `""` → 1
/// - 250 words → 1 (250/200 rounds to 1)
/// - 500 words → 3 (2.5 rounds half away from zero)
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = (words as f64 / WORDS_PER_MINUTE).round() as u32;
    minutes.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_minute() {
        assert_eq!(reading_time(""), 1);
    }

    #[test]
    fn whitespace_only_is_one_minute() {
        assert_eq!(reading_time("   \n\t  "), 1);
    }

    #[test]
    fn short_text_floors_at_one() {
        assert_eq!(reading_time("a few words only"), 1);
    }

    #[test]
    fn two_hundred_fifty_words_rounds_down_to_one() {
        let text = "word ".repeat(250);
        assert_eq!(reading_time(&text), 1);
    }

    #[test]
    fn three_hundred_words_rounds_up_to_two() {
        let text = "word ".repeat(300);
        assert_eq!(reading_time(&text), 2);
    }

    #[test]
    fn exactly_four_hundred_words_is_two() {
        let text = "word ".repeat(400);
        assert_eq!(reading_time(&text), 2);
    }

    #[test]
    fn long_text_matches_plain_division() {
        let text = "word ".repeat(2000);
        assert_eq!(reading_time(&text), 10);
    }

    #[test]
    fn whitespace_runs_count_as_single_separators() {
        assert_eq!(reading_time("one\n\ntwo   three\tfour"), 1);
        let spaced = "word    \n".repeat(300);
        assert_eq!(reading_time(&spaced), 2);
    }

    #[test]
    fn never_below_one_for_any_input() {
        for text in ["", "x", "two words", &"w ".repeat(99)] {
            assert!(reading_time(text) >= 1);
        }
    }
}
