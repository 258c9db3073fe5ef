//! Opinion-vs-factual classification by subjectivity threshold.

use nw_core::ContentType;
use tracing::warn;

use crate::backend::TextScorer;
use crate::Scored;

/// Subjectivity above this marks a text as opinion/editorial.
const OPINION_THRESHOLD: f64 = 0.6;

pub fn classify(backend: &dyn TextScorer, text: &str) -> Scored<ContentType> {
    match backend.polarity_subjectivity(text) {
        Ok((_, subjectivity)) => {
            let content_type = if subjectivity > OPINION_THRESHOLD {
                ContentType::OpinionEditorial
            } else {
                ContentType::Factual
            };
            Scored::ok(content_type)
        }
        Err(e) => {
            warn!("Content type analysis failed: {}", e);
            Scored::degraded(ContentType::Unknown)
        }
    }
}
