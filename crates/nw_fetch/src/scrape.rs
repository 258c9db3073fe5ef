//! Alternate entry point: scrape headlines from a single site's front page.
//!
//! Same shape as the API path — fetch, parse, filter, return — but with no
//! analysis pipeline attached. Reachable through the `scrape` CLI command.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::info;
use url::Url;

use nw_core::{Error, Result};

use crate::newsapi::REQUEST_TIMEOUT;

pub const DEFAULT_FRONT_PAGE: &str = "https://www.reuters.com/world/";
pub const DEFAULT_SOURCE_NAME: &str = "Reuters";

/// At most this many headlines are returned per scrape.
const MAX_HEADLINES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub url: String,
    pub source: String,
    pub summary: String,
}

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Returns the name of the news source.
    fn source_name(&self) -> &str;

    /// Fetches and parses the front page into headlines.
    async fn fetch_headlines(&self) -> Result<Vec<Headline>>;
}

pub struct FrontPageScraper {
    client: reqwest::Client,
    page_url: Url,
    source_name: String,
}

impl FrontPageScraper {
    pub fn new(page_url: &str, source_name: impl Into<String>) -> Result<Self> {
        let page_url = Url::parse(page_url)
            .map_err(|e| Error::Scraping(format!("Failed to parse URL: {}", e)))?;
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            page_url,
            source_name: source_name.into(),
        })
    }

    pub fn reuters() -> Result<Self> {
        Self::new(DEFAULT_FRONT_PAGE, DEFAULT_SOURCE_NAME)
    }

    fn parse_front_page(&self, html: &str) -> Result<Vec<Headline>> {
        let document = Html::parse_document(html);
        let articles = parse_selector("article")?;
        let titles = parse_selector("h3")?;
        let links = parse_selector("a")?;
        let summaries = parse_selector("p")?;

        let mut headlines = Vec::new();
        for article in document.select(&articles) {
            if headlines.len() >= MAX_HEADLINES {
                break;
            }

            let title = article
                .select(&titles)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty());
            let Some(title) = title else {
                continue;
            };

            let url = article
                .select(&links)
                .next()
                .and_then(|el| el.value().attr("href"))
                .map(|href| self.absolutize(href))
                .unwrap_or_default();
            let summary = article
                .select(&summaries)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            headlines.push(Headline {
                title,
                url,
                source: self.source_name.clone(),
                summary,
            });
        }

        Ok(headlines)
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            self.page_url
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string())
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))
}

#[async_trait]
impl HeadlineSource for FrontPageScraper {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    async fn fetch_headlines(&self) -> Result<Vec<Headline>> {
        let response = self.client.get(self.page_url.clone()).send().await?;
        let html = response.text().await?;
        let headlines = self.parse_front_page(&html)?;
        info!("Found {} headlines on {}", headlines.len(), self.source_name);
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> FrontPageScraper {
        FrontPageScraper::reuters().unwrap()
    }

    #[test]
    fn test_parse_front_page() {
        let html = r#"
            <article>
                <h3>First headline</h3>
                <a href="/world/first-story">link</a>
                <p>First summary text.</p>
            </article>
            <article>
                <h3>Second headline</h3>
                <a href="https://other.example.com/story">link</a>
            </article>
        "#;
        let headlines = scraper().parse_front_page(html).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "First headline");
        assert_eq!(headlines[0].url, "https://www.reuters.com/world/first-story");
        assert_eq!(headlines[0].summary, "First summary text.");
        assert_eq!(headlines[0].source, "Reuters");
        // Absolute links pass through untouched.
        assert_eq!(headlines[1].url, "https://other.example.com/story");
        assert_eq!(headlines[1].summary, "");
    }

    #[test]
    fn test_skips_articles_without_headline() {
        let html = r#"
            <article><p>Only a paragraph, no headline.</p></article>
            <article><h3>   </h3><p>Blank headline.</p></article>
            <article><h3>Real headline</h3></article>
        "#;
        let headlines = scraper().parse_front_page(html).unwrap();
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "Real headline");
    }

    #[test]
    fn test_caps_at_ten_headlines() {
        let mut html = String::new();
        for i in 0..15 {
            html.push_str(&format!(
                "<article><h3>Headline {}</h3><a href=\"/story/{}\">l</a></article>",
                i, i
            ));
        }
        let headlines = scraper().parse_front_page(&html).unwrap();
        assert_eq!(headlines.len(), 10);
    }

    #[test]
    fn test_invalid_page_url_rejected() {
        assert!(FrontPageScraper::new("not a url", "Test").is_err());
    }
}
