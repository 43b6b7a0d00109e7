use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::external::quote_provider::{ExternalQuote, QuoteProvider, QuoteProviderError};
use crate::models::{Announcement, IpoListing, MutualFund, NewsItem, StockSummary};

// Upstream quotes name the price field inconsistently depending on the
// endpoint and instrument type. Probed in order, first hit wins.
const PRICE_FIELDS: [&str; 5] = ["lastPrice", "current_price", "currentPrice", "price", "close"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct IndianApiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl IndianApiProvider {
    pub fn from_env() -> Result<Self, QuoteProviderError> {
        let api_key =
            std::env::var("INDIANAPI_KEY").unwrap_or_else(|_| "demo-key".to_string());
        let base_url = std::env::var("INDIANAPI_BASE_URL")
            .unwrap_or_else(|_| "https://stock.indianapi.in".to_string());

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, QuoteProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .header("X-API-KEY", self.api_key.as_str())
            .query(query)
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QuoteProviderError::BadResponse(format!(
                "{} returned status {}",
                path, status
            )));
        }

        resp.json()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))
    }

    /// Probe the known candidate price fields, coercing numeric strings.
    /// Quote payloads are sometimes wrapped in a `data` object.
    fn extract_price(body: &Value) -> Option<f64> {
        let null = Value::Null;
        let candidates = [body, body.get("data").unwrap_or(&null)];

        for object in candidates {
            for field in PRICE_FIELDS {
                match object.get(field) {
                    Some(Value::Number(n)) => {
                        if let Some(price) = n.as_f64() {
                            return Some(price);
                        }
                    }
                    Some(Value::String(s)) => {
                        if let Ok(price) = s.parse::<f64>() {
                            return Some(price);
                        }
                    }
                    _ => {}
                }
            }
        }

        None
    }
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    trending: Vec<StockSummary>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    news: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
struct IpoResponse {
    ipos: Vec<IpoListing>,
}

#[derive(Debug, Deserialize)]
struct MutualFundsResponse {
    funds: Vec<MutualFund>,
}

#[derive(Debug, Deserialize)]
struct AnnouncementsResponse {
    announcements: Vec<Announcement>,
}

#[async_trait]
impl QuoteProvider for IndianApiProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<ExternalQuote, QuoteProviderError> {
        let body: Value = self.get_json("/details/", &[("symbol", symbol)]).await?;

        let price = Self::extract_price(&body)
            .ok_or_else(|| QuoteProviderError::MissingPrice(symbol.to_string()))?;

        Ok(ExternalQuote {
            symbol: symbol.to_string(),
            price,
        })
    }

    async fn fetch_stock_details(
        &self,
        symbol: &str,
    ) -> Result<StockSummary, QuoteProviderError> {
        self.get_json("/details/", &[("symbol", symbol)]).await
    }

    async fn fetch_trending(&self) -> Result<Vec<StockSummary>, QuoteProviderError> {
        let body: TrendingResponse = self.get_json("/trending/", &[]).await?;
        Ok(body.trending)
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, QuoteProviderError> {
        let body: NewsResponse = self.get_json("/news/", &[]).await?;
        Ok(body.news)
    }

    async fn fetch_ipos(&self) -> Result<Vec<IpoListing>, QuoteProviderError> {
        let body: IpoResponse = self.get_json("/ipo/", &[]).await?;
        Ok(body.ipos)
    }

    async fn fetch_mutual_funds(&self) -> Result<Vec<MutualFund>, QuoteProviderError> {
        let body: MutualFundsResponse = self.get_json("/mutual-funds/", &[]).await?;
        Ok(body.funds)
    }

    async fn fetch_announcements(&self) -> Result<Vec<Announcement>, QuoteProviderError> {
        let body: AnnouncementsResponse = self.get_json("/announcements/", &[]).await?;
        Ok(body.announcements)
    }
}
