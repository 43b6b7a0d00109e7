use std::sync::Arc;

use crate::services::market_service::MarketDataService;
use crate::services::prediction_service::PredictionService;
use crate::services::price_resolver::PriceResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PriceResolver>,
    pub predictor: Arc<PredictionService>,
    pub market: Arc<MarketDataService>,
}
