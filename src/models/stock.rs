use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote-level summary for one listed stock. Field names follow the upstream
/// market-data payloads, which mix snake_case and camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub company_name: String,
    pub current_price: f64,
    pub change_percent: f64,
    pub day_high: f64,
    pub day_low: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    pub name: String,
    pub sector: String,
    pub price_min: f64,
    pub price_max: f64,
    pub issue_size: String,
    pub open_date: String,
    pub close_date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub name: String,
    pub category: String,
    pub nav: f64,
    #[serde(rename = "returns1Y")]
    pub returns_1y: f64,
    pub aum: String,
    pub fund_house: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub symbol: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub details: String,
}
