use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Announcement, IpoListing, MutualFund, NewsItem, StockSummary};

/// Latest traded price for a symbol, as reported by the upstream provider.
#[derive(Debug, Clone)]
pub struct ExternalQuote {
    pub symbol: String,
    pub price: f64,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no usable price field for {0}")]
    MissingPrice(String),
}

/// Seam to the external market-data API. Every method is a single attempt:
/// callers fall back on error, they do not retry.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<ExternalQuote, QuoteProviderError>;

    async fn fetch_stock_details(&self, symbol: &str)
        -> Result<StockSummary, QuoteProviderError>;

    async fn fetch_trending(&self) -> Result<Vec<StockSummary>, QuoteProviderError>;

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, QuoteProviderError>;

    async fn fetch_ipos(&self) -> Result<Vec<IpoListing>, QuoteProviderError>;

    async fn fetch_mutual_funds(&self) -> Result<Vec<MutualFund>, QuoteProviderError>;

    async fn fetch_announcements(&self) -> Result<Vec<Announcement>, QuoteProviderError>;
}
