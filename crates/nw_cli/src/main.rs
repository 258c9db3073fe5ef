use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use nw_analysis::{Analyzer, AnalyzerStatus, DEFAULT_BACKEND};
use nw_core::{Category, Config, Result};
use nw_fetch::{FrontPageScraper, HeadlineSource, NewsAggregator, NewsApiClient};
use nw_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analysis backend to use. Available backends: lexicon (default), neutral
    #[arg(long, default_value = DEFAULT_BACKEND)]
    backend: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8000. Defaults to NW_BIND_ADDR.
        #[arg(long)]
        addr: Option<String>,
    },
    /// Fetch and analyze one page of headlines, printing the JSON response
    Fetch {
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Scrape headlines from a news site front page
    Scrape {
        /// Front page URL. Defaults to the Reuters world page.
        #[arg(long)]
        url: Option<String>,
        /// Source name used to label scraped headlines
        #[arg(long, default_value = "Reuters")]
        source: String,
    },
}

fn init_analyzer(backend: &str) -> Arc<Analyzer> {
    let analyzer = Analyzer::new();
    match analyzer.init(backend) {
        AnalyzerStatus::Ready => {}
        status => warn!(
            "⚠️ Analysis backend {} unavailable ({:?}); scorers will return fallback values",
            backend, status
        ),
    }
    Arc::new(analyzer)
}

fn build_aggregator(config: &Config, backend: &str) -> Result<NewsAggregator> {
    let api_key = config.require_api_key()?;
    let client = NewsApiClient::new(api_key, config.news_api_url.clone())?;
    let analyzer = init_analyzer(backend);
    Ok(NewsAggregator::new(Box::new(client), analyzer))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { addr } => {
            let aggregator = build_aggregator(&config, &cli.backend)?;
            let addr = addr.unwrap_or_else(|| config.bind_addr.clone());
            info!("📰 News aggregator starting");
            nw_web::serve(AppState { aggregator }, &addr).await?;
        }
        Commands::Fetch {
            category,
            search,
            page,
        } => {
            let category = Category::from_str(&category)?;
            let aggregator = build_aggregator(&config, &cli.backend)?;
            let response = aggregator
                .fetch_and_analyze(category, search.as_deref(), page)
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Scrape { url, source } => {
            let scraper = match url {
                Some(url) => FrontPageScraper::new(&url, source)?,
                None => FrontPageScraper::reuters()?,
            };
            println!("Fetching articles from {}", scraper.source_name());
            let headlines = scraper.fetch_headlines().await?;
            println!("Found {} articles", headlines.len());
            for headline in headlines {
                println!("- {}", headline.title);
            }
        }
    }

    Ok(())
}
