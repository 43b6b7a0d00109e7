pub mod market_service;
pub mod prediction_service;
pub mod price_resolver;
