//! Rule-based bias detection.

use std::collections::BTreeMap;

use nw_core::{BiasLevel, BiasReport};
use tracing::warn;

use crate::backend::TextScorer;
use crate::readability::round1;
use crate::Scored;

/// Fixed indicator lists, matched exactly against lowercase whitespace-split
/// tokens. `never` and `always` count in two categories on purpose.
const BIAS_INDICATORS: &[(&str, &[&str])] = &[
    ("emotional", &["must", "never", "always", "clearly", "obviously"]),
    ("loaded_words", &["radical", "extremist", "fanatic", "fundamental"]),
    (
        "generalizations",
        &["all", "every", "none", "never", "always"],
    ),
];

/// Subjectivity contributes to the total on a five-point scale.
const SUBJECTIVITY_WEIGHT: f64 = 5.0;

pub fn detect(backend: &dyn TextScorer, text: &str) -> Scored<BiasReport> {
    let subjectivity = match backend.polarity_subjectivity(text) {
        Ok((_, subjectivity)) => subjectivity,
        Err(e) => {
            warn!("Bias detection failed: {}", e);
            return Scored::degraded(BiasReport::fallback());
        }
    };

    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    let mut factors = BTreeMap::new();
    for (category, indicators) in BIAS_INDICATORS {
        let count = words
            .iter()
            .filter(|word| indicators.contains(&word.as_str()))
            .count();
        factors.insert((*category).to_string(), count);
    }

    let keyword_total: usize = factors.values().sum();
    let total = keyword_total as f64 + subjectivity * SUBJECTIVITY_WEIGHT;

    let bias_level = if total > 10.0 {
        BiasLevel::High
    } else if total > 5.0 {
        BiasLevel::Medium
    } else {
        BiasLevel::Low
    };

    Scored::ok(BiasReport {
        bias_level,
        bias_score: round1(total),
        bias_factors: factors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nw_core::{Error, Result};

    #[derive(Debug)]
    struct FixedSubjectivity(f64);

    impl TextScorer for FixedSubjectivity {
        fn name(&self) -> &str {
            "fixed"
        }

        fn polarity_subjectivity(&self, _text: &str) -> Result<(f64, f64)> {
            Ok((0.0, self.0))
        }

        fn noun_phrases(&self, _text: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl TextScorer for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn polarity_subjectivity(&self, _text: &str) -> Result<(f64, f64)> {
            Err(Error::Analysis("no model".to_string()))
        }

        fn noun_phrases(&self, _text: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_keyword_counts_per_category() {
        let scored = detect(
            &FixedSubjectivity(0.0),
            "All radical voices must always be heard",
        );
        let factors = &scored.value.bias_factors;
        // "must" and "always" are emotional; "always" and "all" are
        // generalizations; "radical" is loaded.
        assert_eq!(factors["emotional"], 2);
        assert_eq!(factors["loaded_words"], 1);
        assert_eq!(factors["generalizations"], 2);
        assert_eq!(scored.value.bias_score, 5.0);
        assert_eq!(scored.value.bias_level, BiasLevel::Low);
    }

    #[test]
    fn test_subjectivity_contribution_and_levels() {
        // 0 keyword hits, subjectivity 1.0 -> score 5.0 -> low.
        let scored = detect(&FixedSubjectivity(1.0), "plain text without indicators");
        assert_eq!(scored.value.bias_score, 5.0);
        assert_eq!(scored.value.bias_level, BiasLevel::Low);

        let scored = detect(
            &FixedSubjectivity(0.0),
            "never never never never never never",
        );
        // "never" counts in both emotional and generalizations.
        assert_eq!(scored.value.bias_score, 12.0);
        assert_eq!(scored.value.bias_level, BiasLevel::High);
    }

    #[test]
    fn test_exact_word_match_only() {
        // "radicalized" must not match "radical".
        let scored = detect(&FixedSubjectivity(0.0), "radicalized allies everyone");
        assert_eq!(scored.value.bias_score, 0.0);
        assert_eq!(scored.value.bias_level, BiasLevel::Low);
    }

    #[test]
    fn test_failure_fallback() {
        let scored = detect(&Failing, "anything");
        assert!(scored.degraded);
        assert_eq!(scored.value.bias_level, BiasLevel::Unknown);
        assert_eq!(scored.value.bias_score, 0.0);
        assert!(scored.value.bias_factors.is_empty());
    }
}
