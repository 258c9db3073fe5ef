pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use types::{
    BiasLevel, BiasReport, Category, ContentType, NewsItem, NewsResponse, Readability,
    ReadingLevel, Sentiment, TopicCount,
};
