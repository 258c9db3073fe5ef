pub mod aggregator;
pub mod newsapi;
pub mod scrape;

pub use aggregator::NewsAggregator;
pub use newsapi::{HeadlineProvider, HeadlinesPage, NewsApiClient, RawArticle};
pub use scrape::{FrontPageScraper, Headline, HeadlineSource};

pub mod prelude {
    pub use crate::aggregator::NewsAggregator;
    pub use crate::newsapi::{HeadlineProvider, NewsApiClient};
    pub use nw_core::{Error, NewsResponse, Result};
}
