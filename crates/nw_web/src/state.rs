use nw_fetch::NewsAggregator;

pub struct AppState {
    pub aggregator: NewsAggregator,
}
