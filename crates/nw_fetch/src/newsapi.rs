//! Client for a NewsAPI-compatible top-headlines endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use nw_core::{Category, Error, Result};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const PAGE_SIZE: u32 = 50;
pub const LANGUAGE: &str = "en";

/// Upstream article as returned by the headline API. Everything is optional
/// at the wire level; required fields are enforced by filtering downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    pub source: Option<RawSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: Option<String>,
    #[serde(rename = "totalResults")]
    total_results: Option<u32>,
    articles: Option<Vec<RawArticle>>,
    message: Option<String>,
}

/// One fetched page of headlines. `total` is the upstream-reported total
/// result count, which can exceed the number of articles on the page.
#[derive(Debug, Default)]
pub struct HeadlinesPage {
    pub total: Option<u32>,
    pub articles: Vec<RawArticle>,
}

/// Seam between the aggregator and the upstream headline API.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    async fn top_headlines(
        &self,
        category: Category,
        search: Option<&str>,
        page: u32,
    ) -> Result<HeadlinesPage>;
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Query parameters for one top-headlines request. `category` is omitted
/// for `All` and `q` is omitted when no search string is given.
fn build_params(
    api_key: &str,
    category: Category,
    search: Option<&str>,
    page: u32,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("apiKey", api_key.to_string()),
        ("language", LANGUAGE.to_string()),
        ("pageSize", PAGE_SIZE.to_string()),
        ("page", page.to_string()),
    ];
    if category != Category::All {
        params.push(("category", category.as_str().to_string()));
    }
    if let Some(q) = search {
        params.push(("q", q.to_string()));
    }
    params
}

#[async_trait]
impl HeadlineProvider for NewsApiClient {
    async fn top_headlines(
        &self,
        category: Category,
        search: Option<&str>,
        page: u32,
    ) -> Result<HeadlinesPage> {
        let params = build_params(&self.api_key, category, search, page);
        let response = self.client.get(&self.base_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<HeadlinesResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(body);
            return Err(Error::Fetch(format!(
                "upstream returned {}: {}",
                status, message
            )));
        }

        let data: HeadlinesResponse = response.json().await?;
        if data.status.as_deref() == Some("error") {
            return Err(Error::Fetch(
                data.message
                    .unwrap_or_else(|| "upstream reported an error".to_string()),
            ));
        }

        let articles = data.articles.unwrap_or_default();
        info!("Got response from upstream: {} articles", articles.len());
        Ok(HeadlinesPage {
            total: data.total_results,
            articles,
        })
    }
}
