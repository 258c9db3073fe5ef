use nw_core::Result;

use super::TextScorer;

/// Backend that knows nothing about language. Every text scores neutral and
/// fully factual, and no noun phrases are ever produced, which forces the
/// keyword extractor onto its frequency fallback path. Useful in tests and
/// as a stand-in when no lexicon is wanted.
#[derive(Debug, Clone, Copy)]
pub struct NeutralScorer;

impl TextScorer for NeutralScorer {
    fn name(&self) -> &str {
        "neutral"
    }

    fn polarity_subjectivity(&self, _text: &str) -> Result<(f64, f64)> {
        Ok((0.0, 0.0))
    }

    fn noun_phrases(&self, _text: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
