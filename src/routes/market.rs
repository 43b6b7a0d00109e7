use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::{
    Announcement, ApiResponse, IpoListing, MutualFund, NewsItem, StockSummary,
};
use crate::state::AppState;

// Market data endpoints. Every handler succeeds: the service layer degrades
// to mock data when the upstream provider fails.

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trending", get(get_trending))
        .route("/details/:symbol", get(get_details))
        .route("/news", get(get_news))
        .route("/ipo", get(get_ipos))
        .route("/mutual-funds", get(get_mutual_funds))
        .route("/announcements", get(get_announcements))
}

async fn get_trending(State(state): State<AppState>) -> Json<ApiResponse<Vec<StockSummary>>> {
    info!("GET /market/trending - Fetching trending stocks");
    Json(ApiResponse::ok(state.market.trending().await))
}

async fn get_details(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Json<ApiResponse<StockSummary>> {
    let symbol = symbol.trim().to_uppercase();
    info!("GET /market/details/{} - Fetching stock details", symbol);
    Json(ApiResponse::ok(state.market.details(&symbol).await))
}

async fn get_news(State(state): State<AppState>) -> Json<ApiResponse<Vec<NewsItem>>> {
    info!("GET /market/news - Fetching market news");
    Json(ApiResponse::ok(state.market.news().await))
}

async fn get_ipos(State(state): State<AppState>) -> Json<ApiResponse<Vec<IpoListing>>> {
    info!("GET /market/ipo - Fetching IPO listings");
    Json(ApiResponse::ok(state.market.ipos().await))
}

async fn get_mutual_funds(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<MutualFund>>> {
    info!("GET /market/mutual-funds - Fetching mutual funds");
    Json(ApiResponse::ok(state.market.mutual_funds().await))
}

async fn get_announcements(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Announcement>>> {
    info!("GET /market/announcements - Fetching announcements");
    Json(ApiResponse::ok(state.market.announcements().await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_compile() {
        let _router = router();
    }
}
