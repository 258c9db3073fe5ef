//! Flesch-style readability scoring.

use nw_core::{Readability, ReadingLevel};

use crate::text::split_sentences;

/// Scores readability of the text. Degenerate input (empty, shorter than 10
/// trimmed characters, no sentences, no words) yields the fixed default
/// rather than an error.
pub fn score(text: &str) -> Readability {
    if text.trim().chars().count() < 10 {
        return Readability::fallback();
    }

    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Readability::fallback();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Readability::fallback();
    }

    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllable_count as f64 / words.len() as f64;
    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let flesch = flesch.clamp(0.0, 100.0);

    let reading_level = if flesch > 80.0 {
        ReadingLevel::Easy
    } else if flesch > 60.0 {
        ReadingLevel::Standard
    } else {
        ReadingLevel::Advanced
    };

    Readability {
        score: round1(flesch),
        reading_level,
        avg_sentence_length: round1(words_per_sentence),
    }
}

/// Estimates syllables by counting vowel groups, discounting a trailing
/// silent `e`. Words with no countable vowels default to one syllable.
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut groups = 0usize;
    let mut in_group = false;
    for &c in &letters {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_group {
            groups += 1;
        }
        in_group = is_vowel;
    }

    // Silent trailing e: "there" has two vowel groups but one audible.
    if groups > 1 && letters.last() == Some(&'e') && letters.len() >= 2 {
        let before_last = letters[letters.len() - 2];
        if !matches!(before_last, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'l') {
            groups -= 1;
        }
    }

    groups.max(1)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs_yield_exact_default() {
        for text in ["", "   ", "short", "abc defg."] {
            let result = score(text);
            assert_eq!(result.score, 60.0);
            assert_eq!(result.reading_level, ReadingLevel::Standard);
            assert_eq!(result.avg_sentence_length, 20.0);
        }
    }

    #[test]
    fn test_score_clamped() {
        let simple = "The cat sat. The dog ran. He is big.";
        let result = score(simple);
        assert!((0.0..=100.0).contains(&result.score));

        let dense = "Incomprehensibility characterizes institutionalization \
                     notwithstanding internationalization prioritization \
                     overcapitalization materialization regardless.";
        let result = score(dense);
        assert!((0.0..=100.0).contains(&result.score));
        assert_eq!(result.reading_level, ReadingLevel::Advanced);
    }

    #[test]
    fn test_short_simple_sentences_read_easy() {
        let result = score("The cat sat on it. The dog ran to me. We all had fun.");
        assert!(result.score > 80.0, "score was {}", result.score);
        assert_eq!(result.reading_level, ReadingLevel::Easy);
    }

    #[test]
    fn test_avg_sentence_length() {
        let result = score("One two three four five. Six seven eight nine ten.");
        assert_eq!(result.avg_sentence_length, 5.0);
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("there"), 1);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("xyz"), 1);
    }
}
