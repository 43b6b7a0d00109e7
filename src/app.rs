use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, market, predict};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/api/health", health::router())
        .nest("/api/predict", predict::router())
        .nest("/api/market", market::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
