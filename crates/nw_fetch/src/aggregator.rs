//! Fetch-and-analyze orchestration.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use nw_analysis::Analyzer;
use nw_core::{Category, NewsItem, NewsResponse, Result};

use crate::newsapi::{HeadlineProvider, RawArticle};

/// Articles whose combined trimmed title and description fall under this
/// many characters are dropped.
const MIN_TEXT_CHARS: usize = 10;

/// Runs one request end to end: fetch a headline page, filter malformed
/// articles, score each survivor, pool text for trending topics, assemble
/// the response. No state survives between calls.
pub struct NewsAggregator {
    provider: Box<dyn HeadlineProvider>,
    analyzer: Arc<Analyzer>,
}

impl NewsAggregator {
    pub fn new(provider: Box<dyn HeadlineProvider>, analyzer: Arc<Analyzer>) -> Self {
        Self { provider, analyzer }
    }

    pub fn analyzer(&self) -> &Arc<Analyzer> {
        &self.analyzer
    }

    pub async fn fetch_and_analyze(
        &self,
        category: Category,
        search: Option<&str>,
        page: u32,
    ) -> Result<NewsResponse> {
        info!("📰 Starting news fetch for category: {}", category);
        let headlines = self.provider.top_headlines(category, search, page).await?;
        let upstream_total = headlines.total;

        let mut pooled = String::new();
        let mut articles = Vec::new();
        for raw in headlines.articles {
            match self.process_article(raw, category, &mut pooled) {
                Ok(Some(item)) => {
                    info!("Added article: {}", item.title);
                    articles.push(item);
                }
                Ok(None) => {}
                Err(e) => warn!("Error processing article: {}", e),
            }
        }

        if articles.is_empty() {
            warn!("No articles were successfully processed");
            return Ok(NewsResponse::empty(category));
        }

        let trending_topics = self.analyzer.trending_topics(&pooled);
        let total = upstream_total.unwrap_or(articles.len() as u32);

        Ok(NewsResponse {
            articles,
            total,
            category,
            trending_topics,
        })
    }

    /// Filters and scores a single raw article. `Ok(None)` marks a silent
    /// drop; `Err` marks a processing failure that skips only this article.
    fn process_article(
        &self,
        raw: RawArticle,
        category: Category,
        pooled: &mut String,
    ) -> Result<Option<NewsItem>> {
        let (Some(title), Some(url)) = (non_empty(raw.title), non_empty(raw.url)) else {
            warn!("Skipping article with missing required fields");
            return Ok(None);
        };

        let title = title.trim().to_string();
        let description = raw
            .description
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();
        let full_text = format!("{} {}", title, description).trim().to_string();

        if full_text.chars().count() < MIN_TEXT_CHARS {
            warn!("Skipping article with insufficient text");
            return Ok(None);
        }

        pooled.push(' ');
        pooled.push_str(&full_text);

        let summary_source = if description.is_empty() {
            title.as_str()
        } else {
            description.as_str()
        };
        let analysis = self.analyzer.analyze(&full_text, summary_source);

        let source = raw
            .source
            .and_then(|s| s.name)
            .unwrap_or_else(|| "Unknown Source".to_string());
        let timestamp = raw
            .published_at
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        Ok(Some(NewsItem {
            summary: description.clone(),
            title,
            url,
            source,
            timestamp,
            category,
            url_to_image: raw.url_to_image,
            sentiment: analysis.sentiment.into_value(),
            ai_summary: analysis.ai_summary.into_value(),
            keywords: analysis.keywords.into_value(),
            content_type: analysis.content_type.into_value(),
            readability: analysis.readability.into_value(),
            bias_analysis: analysis.bias_analysis.into_value(),
            key_quotes: analysis.key_quotes.into_value(),
        }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
