use std::collections::HashMap;

use lazy_static::lazy_static;
use nw_core::{Error, Result};

use super::TextScorer;
use crate::text::{strip_punctuation, STOP_WORDS};

/// Polarity weights. Positive weights lean positive, negative weights lean
/// negative; magnitude reflects intensity.
const POLARITY_WORDS: &[(&str, f64)] = &[
    // positive
    ("good", 1.0),
    ("great", 1.5),
    ("excellent", 2.0),
    ("amazing", 2.0),
    ("wonderful", 2.0),
    ("fantastic", 2.0),
    ("best", 1.5),
    ("love", 1.5),
    ("happy", 1.5),
    ("hope", 1.0),
    ("win", 1.5),
    ("wins", 1.5),
    ("victory", 1.5),
    ("success", 1.5),
    ("successful", 1.5),
    ("growth", 1.5),
    ("gain", 1.5),
    ("gains", 1.5),
    ("boost", 1.5),
    ("improve", 1.5),
    ("improved", 1.5),
    ("strong", 1.0),
    ("record", 1.0),
    ("breakthrough", 2.0),
    ("celebrate", 1.5),
    ("surge", 1.5),
    ("soar", 1.5),
    ("rally", 1.0),
    ("recovery", 1.0),
    ("positive", 1.0),
    ("progress", 1.0),
    ("thriving", 1.5),
    ("praise", 1.0),
    // negative
    ("bad", -1.0),
    ("terrible", -2.0),
    ("awful", -2.0),
    ("horrible", -2.0),
    ("worst", -2.0),
    ("hate", -2.0),
    ("angry", -1.5),
    ("fear", -1.5),
    ("panic", -2.0),
    ("crisis", -2.0),
    ("crash", -2.5),
    ("collapse", -2.0),
    ("plunge", -2.5),
    ("decline", -1.5),
    ("loss", -1.5),
    ("losses", -1.5),
    ("fail", -1.5),
    ("failure", -1.5),
    ("failed", -1.5),
    ("war", -1.5),
    ("death", -2.0),
    ("dead", -2.0),
    ("kill", -2.0),
    ("killed", -2.0),
    ("disaster", -2.5),
    ("threat", -1.5),
    ("warning", -1.5),
    ("scandal", -1.5),
    ("fraud", -2.5),
    ("violence", -2.0),
    ("attack", -1.5),
    ("concern", -1.0),
    ("risk", -1.0),
    ("weak", -1.0),
    ("slump", -1.5),
    ("chaos", -2.0),
    ("negative", -1.0),
];

/// Subjectivity strengths in `[0, 1]`. Strongly opinionated markers carry
/// 1.0, hedges and mild evaluatives carry less. Subjectivity of a text is
/// the mean strength over matched tokens, 0 when nothing matches.
const SUBJECTIVITY_WORDS: &[(&str, f64)] = &[
    ("believe", 1.0),
    ("think", 0.8),
    ("feel", 0.8),
    ("opinion", 1.0),
    ("should", 0.9),
    ("must", 0.9),
    ("clearly", 1.0),
    ("obviously", 1.0),
    ("definitely", 1.0),
    ("absolutely", 1.0),
    ("incredible", 1.0),
    ("amazing", 1.0),
    ("wonderful", 1.0),
    ("terrible", 1.0),
    ("awful", 1.0),
    ("horrible", 1.0),
    ("best", 0.9),
    ("worst", 0.9),
    ("beautiful", 0.9),
    ("stunning", 0.9),
    ("remarkable", 0.8),
    ("outrageous", 1.0),
    ("shocking", 0.9),
    ("disgraceful", 1.0),
    ("brilliant", 0.9),
    ("love", 0.9),
    ("hate", 0.9),
    ("great", 0.75),
    ("good", 0.6),
    ("bad", 0.65),
    ("perhaps", 0.5),
    ("probably", 0.5),
    ("maybe", 0.5),
    ("seems", 0.5),
    ("appears", 0.4),
    ("likely", 0.4),
    ("reportedly", 0.3),
    ("allegedly", 0.3),
];

lazy_static! {
    static ref POLARITY: HashMap<&'static str, f64> = POLARITY_WORDS.iter().copied().collect();
    static ref SUBJECTIVITY: HashMap<&'static str, f64> =
        SUBJECTIVITY_WORDS.iter().copied().collect();
}

/// Lexicon-backed scorer. Polarity is the net weighted vote of matched
/// polarity words over their gross weight; subjectivity is the mean strength
/// of matched subjectivity words. Noun phrases are runs of consecutive
/// content tokens, kept when multi-word or when a single token is
/// capitalized in the source text.
#[derive(Debug, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn load() -> Result<Self> {
        if POLARITY.is_empty() || SUBJECTIVITY.is_empty() {
            return Err(Error::Analysis("sentiment lexicons are empty".to_string()));
        }
        Ok(Self)
    }
}

impl TextScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity_subjectivity(&self, text: &str) -> Result<(f64, f64)> {
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut subjectivity_total = 0.0;
        let mut subjectivity_hits = 0usize;

        for token in text.split_whitespace() {
            let word = strip_punctuation(token).to_lowercase();
            if word.is_empty() {
                continue;
            }
            if let Some(&weight) = POLARITY.get(word.as_str()) {
                if weight >= 0.0 {
                    positive += weight;
                } else {
                    negative += -weight;
                }
            }
            if let Some(&strength) = SUBJECTIVITY.get(word.as_str()) {
                subjectivity_total += strength;
                subjectivity_hits += 1;
            }
        }

        let gross = positive + negative;
        let polarity = if gross > 0.0 {
            ((positive - negative) / gross).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let subjectivity = if subjectivity_hits > 0 {
            (subjectivity_total / subjectivity_hits as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok((polarity, subjectivity))
    }

    fn noun_phrases(&self, text: &str) -> Result<Vec<String>> {
        let mut phrases = Vec::new();
        let mut run: Vec<String> = Vec::new();
        let mut run_capitalized = false;

        for token in text.split_whitespace() {
            let clean = strip_punctuation(token);
            let lower = clean.to_lowercase();
            let is_content = clean.chars().count() >= 3
                && clean.chars().all(|c| c.is_alphabetic())
                && !STOP_WORDS.contains(lower.as_str());

            if is_content {
                if run.is_empty() {
                    run_capitalized = clean.chars().next().is_some_and(|c| c.is_uppercase());
                }
                run.push(lower);
                // A token carrying trailing punctuation closes its phrase.
                if token.ends_with(|c: char| !c.is_alphanumeric()) {
                    flush_run(&mut phrases, &mut run, run_capitalized);
                }
            } else {
                flush_run(&mut phrases, &mut run, run_capitalized);
            }
        }
        flush_run(&mut phrases, &mut run, run_capitalized);

        Ok(phrases)
    }
}

fn flush_run(phrases: &mut Vec<String>, run: &mut Vec<String>, capitalized: bool) {
    if run.len() >= 2 || (run.len() == 1 && capitalized) {
        phrases.push(run.join(" "));
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_positive() {
        let scorer = LexiconScorer::load().unwrap();
        let (polarity, _) = scorer
            .polarity_subjectivity("A wonderful breakthrough and record growth")
            .unwrap();
        assert!(polarity > 0.5, "polarity was {}", polarity);
    }

    #[test]
    fn test_polarity_negative() {
        let scorer = LexiconScorer::load().unwrap();
        let (polarity, _) = scorer
            .polarity_subjectivity("Markets crash as panic and fear spread")
            .unwrap();
        assert!(polarity < -0.5, "polarity was {}", polarity);
    }

    #[test]
    fn test_polarity_neutral_when_no_matches() {
        let scorer = LexiconScorer::load().unwrap();
        let (polarity, subjectivity) = scorer
            .polarity_subjectivity("The committee met on Tuesday")
            .unwrap();
        assert_eq!(polarity, 0.0);
        assert_eq!(subjectivity, 0.0);
    }

    #[test]
    fn test_polarity_bounds() {
        let scorer = LexiconScorer::load().unwrap();
        for text in [
            "crash crash crash disaster",
            "wonderful amazing excellent",
            "",
            "good bad good bad",
        ] {
            let (polarity, subjectivity) = scorer.polarity_subjectivity(text).unwrap();
            assert!((-1.0..=1.0).contains(&polarity));
            assert!((0.0..=1.0).contains(&subjectivity));
        }
    }

    #[test]
    fn test_subjectivity_strong_opinion() {
        let scorer = LexiconScorer::load().unwrap();
        let (_, subjectivity) = scorer
            .polarity_subjectivity("Clearly this is the most outrageous and disgraceful decision")
            .unwrap();
        assert!(subjectivity > 0.6, "subjectivity was {}", subjectivity);
    }

    #[test]
    fn test_noun_phrases_multi_word_runs() {
        let scorer = LexiconScorer::load().unwrap();
        let phrases = scorer
            .noun_phrases("The climate summit opened in Geneva today")
            .unwrap();
        assert!(phrases.contains(&"climate summit opened".to_string()));
        assert!(phrases.contains(&"geneva today".to_string()));
    }

    #[test]
    fn test_noun_phrases_skip_lone_lowercase() {
        let scorer = LexiconScorer::load().unwrap();
        // "economy" is a lone lowercase content word between stop words.
        let phrases = scorer.noun_phrases("the economy and the market").unwrap();
        assert!(!phrases.contains(&"economy".to_string()));
    }

    #[test]
    fn test_noun_phrases_respect_sentence_punctuation() {
        let scorer = LexiconScorer::load().unwrap();
        let phrases = scorer
            .noun_phrases("Talks collapsed. Negotiators left early")
            .unwrap();
        // The period after "collapsed" closes the run.
        assert!(phrases.contains(&"talks collapsed".to_string()));
        assert!(phrases.contains(&"negotiators left early".to_string()));
    }
}
