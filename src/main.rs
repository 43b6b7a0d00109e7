mod app;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::external::indianapi::IndianApiProvider;
use crate::external::quote_provider::QuoteProvider;
use crate::services::market_service::{self, MarketDataService};
use crate::services::prediction_service::{PredictionPolicy, PredictionService};
use crate::services::price_resolver::PriceResolver;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(logging::LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let provider: Arc<dyn QuoteProvider> = Arc::new(
        IndianApiProvider::from_env().context("failed to create market data provider")?,
    );

    let reference_stocks = market_service::reference_stocks();
    let reference_prices = reference_stocks
        .iter()
        .map(|s| (s.symbol.clone(), s.current_price))
        .collect();

    let policy = PredictionPolicy::from_env();
    tracing::info!("Prediction policy: {:?}", policy);

    let state = AppState {
        resolver: Arc::new(PriceResolver::new(provider.clone(), reference_prices)),
        predictor: Arc::new(PredictionService::new(policy)),
        market: Arc::new(MarketDataService::new(provider, reference_stocks)),
    };

    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("StockPulse backend running at http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
