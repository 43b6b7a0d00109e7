use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::external::quote_provider::QuoteProvider;
use crate::models::{Announcement, IpoListing, MutualFund, NewsItem, StockSummary};

/// Market data endpoints backed by the upstream provider, each degrading to
/// curated mock data when the upstream call fails. Nothing here returns an
/// error to the caller; a failed upstream call is logged and absorbed.
pub struct MarketDataService {
    provider: Arc<dyn QuoteProvider>,
    reference_stocks: Vec<StockSummary>,
}

/// The well-known NSE symbols served when the upstream is unreachable.
/// Prices are approximate snapshots, good enough for demo rendering.
pub fn reference_stocks() -> Vec<StockSummary> {
    vec![
        stock("TCS", "Tata Consultancy Services", 3850.50, 2.45, 3900.0, 3800.0),
        stock("INFY", "Infosys Limited", 1625.75, -1.23, 1680.0, 1620.0),
        stock("HDFC", "HDFC Bank Limited", 1750.25, 3.15, 1800.0, 1720.0),
        stock("RELIANCE", "Reliance Industries", 1500.00, 1.75, 1550.0, 1480.0),
        stock("ICICIBANK", "ICICI Bank Limited", 825.50, -0.85, 850.0, 820.0),
        stock("WIPRO", "Wipro Limited", 450.75, 2.30, 465.0, 445.0),
    ]
}

fn stock(
    symbol: &str,
    company_name: &str,
    current_price: f64,
    change_percent: f64,
    day_high: f64,
    day_low: f64,
) -> StockSummary {
    StockSummary {
        symbol: symbol.to_string(),
        company_name: company_name.to_string(),
        current_price,
        change_percent,
        day_high,
        day_low,
    }
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn QuoteProvider>, reference_stocks: Vec<StockSummary>) -> Self {
        Self {
            provider,
            reference_stocks,
        }
    }

    pub async fn trending(&self) -> Vec<StockSummary> {
        match self.provider.fetch_trending().await {
            Ok(stocks) => stocks,
            Err(e) => {
                warn!("Trending stocks unavailable: {} - using fallback data", e);
                let mut gainers: Vec<StockSummary> = self
                    .reference_stocks
                    .iter()
                    .filter(|s| s.change_percent > 0.0)
                    .cloned()
                    .collect();
                gainers.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
                gainers.truncate(6);
                gainers
            }
        }
    }

    pub async fn details(&self, symbol: &str) -> StockSummary {
        match self.provider.fetch_stock_details(symbol).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Details unavailable for {}: {} - using fallback data", symbol, e);
                self.reference_stocks
                    .iter()
                    .find(|s| s.symbol == symbol)
                    .or_else(|| self.reference_stocks.first())
                    .cloned()
                    .unwrap_or_else(|| stock(symbol, symbol, 0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    pub async fn news(&self) -> Vec<NewsItem> {
        match self.provider.fetch_news().await {
            Ok(news) => news,
            Err(e) => {
                warn!("News unavailable: {} - using fallback data", e);
                let now = Utc::now();
                ["Market Update", "Stock Rally", "Sector Watch"]
                    .into_iter()
                    .map(|title| NewsItem {
                        title: title.to_string(),
                        description: "Market activity and price movements".to_string(),
                        date: now,
                        url: "#".to_string(),
                    })
                    .collect()
            }
        }
    }

    pub async fn ipos(&self) -> Vec<IpoListing> {
        match self.provider.fetch_ipos().await {
            Ok(ipos) => ipos,
            Err(e) => {
                warn!("IPO data unavailable: {} - using fallback data", e);
                vec![
                    IpoListing {
                        name: "Tech Startup Ltd".to_string(),
                        sector: "Technology".to_string(),
                        price_min: 100.0,
                        price_max: 150.0,
                        issue_size: "₹500 Cr".to_string(),
                        open_date: "2024-01-15".to_string(),
                        close_date: "2024-01-20".to_string(),
                        status: "Open".to_string(),
                    },
                    IpoListing {
                        name: "Green Energy Corp".to_string(),
                        sector: "Energy".to_string(),
                        price_min: 80.0,
                        price_max: 120.0,
                        issue_size: "₹300 Cr".to_string(),
                        open_date: "2024-01-22".to_string(),
                        close_date: "2024-01-27".to_string(),
                        status: "Upcoming".to_string(),
                    },
                ]
            }
        }
    }

    pub async fn mutual_funds(&self) -> Vec<MutualFund> {
        match self.provider.fetch_mutual_funds().await {
            Ok(funds) => funds,
            Err(e) => {
                warn!("Mutual fund data unavailable: {} - using fallback data", e);
                vec![
                    fund("HDFC Growth Fund", "equity", 450.50, 12.5, "₹5000 Cr", "HDFC"),
                    fund("ICICI Equity Fund", "equity", 380.75, 15.2, "₹4000 Cr", "ICICI"),
                    fund("Axis Bond Fund", "debt", 250.25, 8.3, "₹2000 Cr", "Axis"),
                ]
            }
        }
    }

    pub async fn announcements(&self) -> Vec<Announcement> {
        match self.provider.fetch_announcements().await {
            Ok(announcements) => announcements,
            Err(e) => {
                warn!("Announcements unavailable: {} - using fallback data", e);
                let now = Utc::now();
                vec![
                    announcement("TCS", "Tata Consultancy Services", "Dividend",
                        "Interim Dividend Announced", "₹15 per share", now),
                    announcement("INFY", "Infosys Limited", "Split",
                        "Stock Split Approved", "1:5", now),
                    announcement("HDFC", "HDFC Bank", "Bonus",
                        "Bonus Shares Issued", "1:2", now),
                ]
            }
        }
    }
}

fn fund(
    name: &str,
    category: &str,
    nav: f64,
    returns_1y: f64,
    aum: &str,
    fund_house: &str,
) -> MutualFund {
    MutualFund {
        name: name.to_string(),
        category: category.to_string(),
        nav,
        returns_1y,
        aum: aum.to_string(),
        fund_house: fund_house.to_string(),
    }
}

fn announcement(
    symbol: &str,
    company: &str,
    kind: &str,
    title: &str,
    details: &str,
    date: chrono::DateTime<Utc>,
) -> Announcement {
    Announcement {
        symbol: symbol.to_string(),
        company: company.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        date,
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::price_resolver::tests::StubProvider;

    fn down_service() -> MarketDataService {
        MarketDataService::new(Arc::new(StubProvider { quote: None }), reference_stocks())
    }

    #[tokio::test]
    async fn trending_fallback_serves_sorted_gainers() {
        let trending = down_service().trending().await;
        assert!(!trending.is_empty());
        assert!(trending.iter().all(|s| s.change_percent > 0.0));
        assert!(trending.windows(2).all(|w| w[0].change_percent >= w[1].change_percent));
    }

    #[tokio::test]
    async fn details_fallback_finds_known_symbol() {
        let details = down_service().details("INFY").await;
        assert_eq!(details.symbol, "INFY");
        assert_eq!(details.current_price, 1625.75);
    }

    #[tokio::test]
    async fn details_fallback_defaults_to_first_stock() {
        let details = down_service().details("ZZZZ").await;
        assert_eq!(details.symbol, "TCS");
    }

    #[tokio::test]
    async fn mock_catalogs_are_never_empty() {
        let service = down_service();
        assert!(!service.news().await.is_empty());
        assert!(!service.ipos().await.is_empty());
        assert!(!service.mutual_funds().await.is_empty());
        assert!(!service.announcements().await.is_empty());
    }
}
