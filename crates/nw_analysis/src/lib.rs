//! Heuristic text-analysis pipeline.
//!
//! Seven independent scorers run over the same article text, each producing
//! a bounded score with a documented fallback. Scorers never fail the
//! request: a broken or unavailable NLP backend degrades results to their
//! fallback values, tagged so callers can tell genuine neutrality from a
//! suppressed failure.

use std::sync::{Arc, RwLock};

use nw_core::{BiasReport, ContentType, Readability, Sentiment, TopicCount};
use tracing::{info, warn};

pub mod backend;
pub mod bias;
pub mod content_type;
pub mod keywords;
pub mod quotes;
pub mod readability;
pub mod sentiment;
pub mod summary;
pub mod text;
pub mod trending;

pub use backend::{create_backend, LexiconScorer, NeutralScorer, TextScorer};

pub const DEFAULT_BACKEND: &str = "lexicon";

/// A scorer result plus whether it was substituted due to a failure or an
/// unavailable backend. The wire format carries only the value; the tag is
/// for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub value: T,
    pub degraded: bool,
}

impl<T> Scored<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    pub fn degraded(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Observable lifecycle of the analyzer's NLP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerStatus {
    Uninitialized,
    Loading,
    Ready,
    Degraded,
}

enum BackendState {
    Uninitialized,
    Loading,
    Ready(Arc<dyn TextScorer>),
    Degraded,
}

/// Entry point to the scoring pipeline. Shared across requests; all methods
/// take `&self` and hold no per-request state.
///
/// Until [`Analyzer::init`] succeeds, every scorer call returns its
/// documented fallback value tagged degraded, without blocking.
pub struct Analyzer {
    state: RwLock<BackendState>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("status", &self.status())
            .finish()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BackendState::Uninitialized),
        }
    }

    /// Builds an analyzer that is immediately ready on the given backend.
    pub fn with_backend(backend: Arc<dyn TextScorer>) -> Self {
        Self {
            state: RwLock::new(BackendState::Ready(backend)),
        }
    }

    /// Loads the named backend. Failure leaves the analyzer degraded and is
    /// reported in the returned status; it is not fatal.
    pub fn init(&self, backend_name: &str) -> AnalyzerStatus {
        *self.state.write().unwrap() = BackendState::Loading;
        match backend::create_backend(backend_name) {
            Ok(backend) => {
                info!("🧠 Analysis backend initialized successfully (using {})", backend.name());
                *self.state.write().unwrap() = BackendState::Ready(backend);
                AnalyzerStatus::Ready
            }
            Err(e) => {
                warn!("Failed to initialize analysis backend {}: {}", backend_name, e);
                *self.state.write().unwrap() = BackendState::Degraded;
                AnalyzerStatus::Degraded
            }
        }
    }

    pub fn status(&self) -> AnalyzerStatus {
        match *self.state.read().unwrap() {
            BackendState::Uninitialized => AnalyzerStatus::Uninitialized,
            BackendState::Loading => AnalyzerStatus::Loading,
            BackendState::Ready(_) => AnalyzerStatus::Ready,
            BackendState::Degraded => AnalyzerStatus::Degraded,
        }
    }

    fn backend(&self) -> Option<Arc<dyn TextScorer>> {
        match &*self.state.read().unwrap() {
            BackendState::Ready(backend) => Some(backend.clone()),
            _ => None,
        }
    }

    pub fn sentiment(&self, text: &str) -> Scored<Sentiment> {
        match self.backend() {
            Some(backend) => sentiment::analyze(backend.as_ref(), text),
            None => Scored::degraded(Sentiment::fallback()),
        }
    }

    pub fn content_type(&self, text: &str) -> Scored<ContentType> {
        match self.backend() {
            Some(backend) => content_type::classify(backend.as_ref(), text),
            None => Scored::degraded(ContentType::Unknown),
        }
    }

    pub fn readability(&self, text: &str) -> Scored<Readability> {
        match self.backend() {
            Some(_) => Scored::ok(readability::score(text)),
            None => Scored::degraded(Readability::fallback()),
        }
    }

    pub fn bias(&self, text: &str) -> Scored<BiasReport> {
        match self.backend() {
            Some(backend) => bias::detect(backend.as_ref(), text),
            None => Scored::degraded(BiasReport::fallback()),
        }
    }

    pub fn key_quotes(&self, text: &str, max_quotes: usize) -> Scored<Vec<String>> {
        match self.backend() {
            Some(_) => Scored::ok(quotes::extract(text, max_quotes)),
            None => Scored::degraded(Vec::new()),
        }
    }

    pub fn keywords(&self, text: &str, n: usize) -> Scored<Vec<String>> {
        match self.backend() {
            Some(backend) => keywords::extract(backend.as_ref(), text, n),
            None => Scored::degraded(Vec::new()),
        }
    }

    pub fn summarize(&self, text: &str, max_sentences: usize) -> Scored<String> {
        match self.backend() {
            Some(_) => Scored::ok(summary::summarize(text, max_sentences)),
            None => Scored::degraded(text.to_string()),
        }
    }

    /// Runs the full scorer battery for one article. `full_text` is the
    /// combined title and description; `summary_source` is the description,
    /// or the title when the description is empty.
    pub fn analyze(&self, full_text: &str, summary_source: &str) -> ArticleAnalysis {
        let analysis = ArticleAnalysis {
            sentiment: self.sentiment(full_text),
            ai_summary: self.summarize(summary_source, summary::DEFAULT_MAX_SENTENCES),
            keywords: self.keywords(full_text, keywords::DEFAULT_KEYWORDS),
            content_type: self.content_type(full_text),
            readability: self.readability(full_text),
            bias_analysis: self.bias(full_text),
            key_quotes: self.key_quotes(summary_source, quotes::DEFAULT_MAX_QUOTES),
        };
        if analysis.any_degraded() {
            warn!("One or more scorers returned fallback values");
        }
        analysis
    }

    /// Top trending keywords of the pooled text, recounted as substring
    /// occurrences over that same pooled text.
    pub fn trending_topics(&self, pooled: &str) -> Vec<TopicCount> {
        let topics = self
            .keywords(pooled, keywords::TRENDING_KEYWORDS)
            .into_value();
        trending::topics_with_counts(topics, pooled)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-article output of [`Analyzer::analyze`].
#[derive(Debug, Clone)]
pub struct ArticleAnalysis {
    pub sentiment: Scored<Sentiment>,
    pub ai_summary: Scored<String>,
    pub keywords: Scored<Vec<String>>,
    pub content_type: Scored<ContentType>,
    pub readability: Scored<Readability>,
    pub bias_analysis: Scored<BiasReport>,
    pub key_quotes: Scored<Vec<String>>,
}

impl ArticleAnalysis {
    pub fn any_degraded(&self) -> bool {
        self.sentiment.degraded
            || self.ai_summary.degraded
            || self.keywords.degraded
            || self.content_type.degraded
            || self.readability.degraded
            || self.bias_analysis.degraded
            || self.key_quotes.degraded
    }
}
