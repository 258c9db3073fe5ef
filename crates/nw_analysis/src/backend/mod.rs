use std::fmt;
use std::sync::Arc;

use nw_core::{Error, Result};

pub mod lexicon;
pub mod neutral;

pub use lexicon::LexiconScorer;
pub use neutral::NeutralScorer;

/// NLP capability consumed by the scoring pipeline. The thresholds and
/// formulas in the scorers are backend-independent; a backend only supplies
/// raw polarity/subjectivity estimates and noun-phrase candidates.
pub trait TextScorer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Returns `(polarity, subjectivity)` with polarity in `[-1, 1]` and
    /// subjectivity in `[0, 1]`.
    fn polarity_subjectivity(&self, text: &str) -> Result<(f64, f64)>;

    /// Returns noun-phrase candidates in extraction order, lowercased.
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>>;
}

pub fn create_backend(name: &str) -> Result<Arc<dyn TextScorer>> {
    match name {
        "lexicon" => Ok(Arc::new(LexiconScorer::load()?)),
        "neutral" => Ok(Arc::new(NeutralScorer)),
        other => Err(Error::Analysis(format!(
            "Unknown analysis backend: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_backend() {
        assert_eq!(create_backend("lexicon").unwrap().name(), "lexicon");
        assert_eq!(create_backend("neutral").unwrap().name(), "neutral");
        assert!(create_backend("textblob").is_err());
    }
}
