//! Keyword extraction: noun phrases first, word frequency as fallback.

use std::collections::HashMap;

use tracing::warn;

use crate::backend::TextScorer;
use crate::text::STOP_WORDS;
use crate::Scored;

pub const DEFAULT_KEYWORDS: usize = 5;
pub const TRENDING_KEYWORDS: usize = 10;

/// Extracts up to `n` keywords. The primary strategy ranks the backend's
/// noun phrases by frequency; the fallback fires when the primary yields
/// nothing (or the backend errors) and ranks stop-word-filtered tokens.
/// Ties are broken by first appearance in both strategies.
pub fn extract(backend: &dyn TextScorer, text: &str, n: usize) -> Scored<Vec<String>> {
    let mut degraded = false;
    match backend.noun_phrases(text) {
        Ok(phrases) if !phrases.is_empty() => {
            return Scored::ok(top_by_frequency(phrases, n));
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Noun phrase extraction failed: {}", e);
            degraded = true;
        }
    }

    let tokens: Vec<String> = text
        .split_whitespace()
        .filter(|word| {
            word.chars().count() > 3 && word.chars().all(|c| c.is_alphanumeric())
        })
        .map(|word| word.to_lowercase())
        .filter(|word| !STOP_WORDS.contains(word.as_str()))
        .collect();

    let keywords = top_by_frequency(tokens, n);
    if degraded {
        Scored::degraded(keywords)
    } else {
        Scored::ok(keywords)
    }
}

/// Ranks terms by occurrence count, descending, preserving first-seen order
/// among equal counts.
fn top_by_frequency(terms: Vec<String>, n: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut ordered: Vec<&str> = Vec::new();
    for term in &terms {
        let entry = counts.entry(term.as_str()).or_insert(0);
        if *entry == 0 {
            ordered.push(term.as_str());
        }
        *entry += 1;
    }

    let mut ranked: Vec<(&str, usize)> = ordered
        .into_iter()
        .map(|term| (term, counts[term]))
        .collect();
    // Stable sort keeps first-seen order for equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(term, _)| term.to_string())
        .collect()
}
