use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Categories understood by the upstream headline API. `All` is only valid
/// as a request filter and is never reported back in the category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
    All,
}

impl Category {
    /// The fixed category list exposed by `/api/categories`, excluding `All`.
    pub const LISTED: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Technology,
        Category::Entertainment,
        Category::Sports,
        Category::Science,
        Category::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
            Category::All => "all",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "business" => Ok(Category::Business),
            "technology" => Ok(Category::Technology),
            "entertainment" => Ok(Category::Entertainment),
            "sports" => Ok(Category::Sports),
            "science" => Ok(Category::Science),
            "health" => Ok(Category::Health),
            "all" => Ok(Category::All),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Neutral values substituted when the sentiment backend is unavailable.
    pub fn fallback() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "opinion/editorial")]
    OpinionEditorial,
    #[serde(rename = "factual")]
    Factual,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    Easy,
    Standard,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub score: f64,
    pub reading_level: ReadingLevel,
    pub avg_sentence_length: f64,
}

impl Readability {
    /// Default returned for degenerate input and on analysis failure.
    pub fn fallback() -> Self {
        Self {
            score: 60.0,
            reading_level: ReadingLevel::Standard,
            avg_sentence_length: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasLevel {
    Low,
    Medium,
    High,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub bias_level: BiasLevel,
    pub bias_score: f64,
    pub bias_factors: BTreeMap<String, usize>,
}

impl BiasReport {
    pub fn fallback() -> Self {
        Self {
            bias_level: BiasLevel::Unknown,
            bias_score: 0.0,
            bias_factors: BTreeMap::new(),
        }
    }
}

/// One fully-analyzed article as served to clients. Built fresh per fetch,
/// never mutated afterwards, discarded at the end of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub timestamp: String,
    pub summary: String,
    pub category: Category,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    pub sentiment: Sentiment,
    pub ai_summary: String,
    pub keywords: Vec<String>,
    pub content_type: ContentType,
    pub readability: Readability,
    pub bias_analysis: BiasReport,
    pub key_quotes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsItem>,
    pub total: u32,
    pub category: Category,
    pub trending_topics: Vec<TopicCount>,
}

impl NewsResponse {
    /// The response returned when no upstream article survives filtering.
    /// Total is forced to 0 regardless of what the upstream reported.
    pub fn empty(category: Category) -> Self {
        Self {
            articles: Vec::new(),
            total: 0,
            category,
            trending_topics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::LISTED {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert!("politics".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Technology).unwrap(),
            "\"technology\""
        );
    }

    #[test]
    fn test_content_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ContentType::OpinionEditorial).unwrap(),
            "\"opinion/editorial\""
        );
        assert_eq!(
            serde_json::to_string(&ContentType::Factual).unwrap(),
            "\"factual\""
        );
    }

    #[test]
    fn test_news_item_image_field_name() {
        let item = NewsItem {
            title: "Title".to_string(),
            url: "http://example.com".to_string(),
            source: "Example".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            summary: String::new(),
            category: Category::General,
            url_to_image: Some("http://example.com/img.png".to_string()),
            sentiment: Sentiment::fallback(),
            ai_summary: String::new(),
            keywords: vec![],
            content_type: ContentType::Factual,
            readability: Readability::fallback(),
            bias_analysis: BiasReport::fallback(),
            key_quotes: vec![],
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("urlToImage").is_some());
        assert!(json.get("url_to_image").is_none());
    }

    #[test]
    fn test_empty_response_forces_total_zero() {
        let response = NewsResponse::empty(Category::All);
        assert!(response.articles.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.trending_topics.is_empty());
    }
}
