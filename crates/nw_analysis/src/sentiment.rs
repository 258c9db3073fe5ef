//! Sentiment scoring on top of a [`TextScorer`] backend.

use nw_core::Sentiment;
use tracing::warn;

use crate::backend::TextScorer;
use crate::Scored;

/// Analyzes sentiment of the text. Polarity and subjectivity are rounded to
/// two decimals. Backend failures never propagate; the neutral fallback is
/// substituted and the result tagged degraded.
pub fn analyze(backend: &dyn TextScorer, text: &str) -> Scored<Sentiment> {
    match backend.polarity_subjectivity(text) {
        Ok((polarity, subjectivity)) => Scored::ok(Sentiment {
            polarity: round2(polarity),
            subjectivity: round2(subjectivity),
        }),
        Err(e) => {
            warn!("Sentiment analysis failed: {}", e);
            Scored::degraded(Sentiment::fallback())
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
