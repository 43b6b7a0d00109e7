mod envelope;
mod prediction;
mod stock;

pub use envelope::ApiResponse;
pub use prediction::{Confidence, Direction, PredictionResult, PredictionStatus};
pub use stock::{Announcement, IpoListing, MutualFund, NewsItem, StockSummary};
