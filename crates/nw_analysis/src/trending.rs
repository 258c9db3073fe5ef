//! Trending topics over the pooled text of one response.

use nw_core::TopicCount;

/// Pairs each topic with its literal, case-insensitive, non-overlapping
/// occurrence count over the pooled text. This is a substring count, not a
/// per-article frequency: a topic can match inside unrelated words and can
/// count more than once per article.
pub fn topics_with_counts(topics: Vec<String>, pooled: &str) -> Vec<TopicCount> {
    let haystack = pooled.to_lowercase();
    topics
        .into_iter()
        .map(|topic| {
            let needle = topic.to_lowercase();
            let count = if needle.is_empty() {
                0
            } else {
                haystack.matches(needle.as_str()).count()
            };
            TopicCount { topic, count }
        })
        .collect()
}
