//! Naive quote extraction.

use crate::text::split_sentences;

pub const DEFAULT_MAX_QUOTES: usize = 2;

/// Quotation marks that mark a sentence as carrying a quote. Straight and
/// curly double quotes are treated alike.
const QUOTE_MARKS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// Returns the trimmed sentences containing a quotation mark, in document
/// order, up to `max_quotes`. The marks themselves are not stripped.
pub fn extract(text: &str, max_quotes: usize) -> Vec<String> {
    let mut quotes = Vec::new();
    for sentence in split_sentences(text) {
        if quotes.len() >= max_quotes {
            break;
        }
        if sentence.contains(QUOTE_MARKS) {
            quotes.push(sentence.trim().to_string());
        }
    }
    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_quoted_sentences() {
        let text = "The mayor spoke today. \"We will rebuild,\" she said. Work starts Monday.";
        let quotes = extract(text, DEFAULT_MAX_QUOTES);
        assert_eq!(quotes, vec!["\"We will rebuild,\" she said."]);
    }

    #[test]
    fn test_curly_quotes_match() {
        let text = "\u{201C}No comment,\u{201D} the spokesman said. Nothing else happened.";
        let quotes = extract(text, DEFAULT_MAX_QUOTES);
        assert_eq!(quotes.len(), 1);
        assert!(quotes[0].starts_with('\u{201C}'));
    }

    #[test]
    fn test_respects_max_quotes() {
        let text = "\"One.\" \"Two.\" \"Three.\"";
        let quotes = extract(text, 2);
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn test_no_quotes() {
        assert!(extract("Nothing quotable here. Still nothing.", 2).is_empty());
        assert!(extract("", 2).is_empty());
    }
}
