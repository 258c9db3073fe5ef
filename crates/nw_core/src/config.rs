use crate::error::{Error, Result};

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the upstream headline API. Optional at load time so the
    /// scrape entry point can run without one; fetching requires it.
    pub api_key: Option<String>,
    pub news_api_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: read_var("NEWS_API_KEY"),
            news_api_url: read_var("NEWS_API_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string()),
            bind_addr: read_var("NW_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }

    /// The API key, or a configuration error naming the missing variable.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Config("NEWS_API_KEY is not set".to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
