//! Extractive summarization by sentence position and length.

use crate::text::split_sentences;

pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Bonus for sentences whose word count falls in the readable middle range.
const LENGTH_BONUS: f64 = 0.3;
const LENGTH_MIN: usize = 10;
const LENGTH_MAX: usize = 25;

/// Picks the `max_sentences` highest-scoring sentences and rejoins them in
/// document order. Texts at or under the limit are returned unchanged.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return text.to_string();
    }

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let mut score = 1.0 / (i as f64 + 1.0);
            let words = sentence.split_whitespace().count();
            if (LENGTH_MIN..=LENGTH_MAX).contains(&words) {
                score += LENGTH_BONUS;
            }
            (i, score)
        })
        .collect();

    // Stable sort: equal scores keep document order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut selected: Vec<usize> = scored.into_iter().take(max_sentences).map(|(i, _)| i).collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_or_under_limit() {
        assert_eq!(summarize("One sentence.", 3), "One sentence.");
        assert_eq!(
            summarize("First. Second. Third.", 3),
            "First. Second. Third."
        );
        assert_eq!(summarize("", 3), "");
    }

    #[test]
    fn test_selects_top_sentences() {
        let text = "First point made here. Second point follows. Third one. Fourth one. Fifth one.";
        let summary = summarize(text, 3);
        // Position scoring favors the earliest sentences.
        assert_eq!(
            summary,
            "First point made here. Second point follows. Third one."
        );
    }

    #[test]
    fn test_preserves_document_order() {
        // A late sentence in the 10..=25 word band outscores short middle
        // sentences, yet must appear last in the output.
        let long_tail = "this sentence has exactly eleven words inside it right now okay.";
        let text = format!("Lead sentence here. Tiny. Small. {}", long_tail);
        let summary = summarize(&text, 2);
        let lead_pos = summary.find("Lead sentence").unwrap();
        let tail_pos = summary.find("this sentence").unwrap();
        assert!(lead_pos < tail_pos);
        assert!(!summary.contains("Tiny."));
    }

    #[test]
    fn test_summary_is_subset_of_sentences() {
        let text = "Alpha one. Beta two. Gamma three. Delta four. Epsilon five.";
        let summary = summarize(text, 2);
        for sentence in split_sentences(&summary) {
            assert!(text.contains(&sentence));
        }
    }
}
