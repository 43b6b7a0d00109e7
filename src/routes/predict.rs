use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{PredictionResult, PredictionStatus};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(missing_symbol))
        .route("/:symbol", get(get_prediction))
        .route("/status/:symbol", get(get_prediction_status))
}

pub async fn get_prediction(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PredictionResult>, AppError> {
    let symbol = normalize_symbol(&symbol)?;
    info!("GET /predict/{} - Generating prediction", symbol);

    let resolved = state.resolver.resolve(&symbol).await;
    Ok(Json(state.predictor.predict(&resolved)))
}

pub async fn get_prediction_status(
    Path(symbol): Path<String>,
    State(_state): State<AppState>,
) -> Result<Json<PredictionStatus>, AppError> {
    let symbol = normalize_symbol(&symbol)?;
    info!("GET /predict/status/{} - Reporting model status", symbol);

    Ok(Json(PredictionStatus::untrained(symbol)))
}

// A bare `/api/predict/` never matches the `:symbol` route, so answer it
// with the validation error the caller expects.
async fn missing_symbol() -> AppError {
    AppError::Validation("Stock symbol required".to_string())
}

fn normalize_symbol(raw: &str) -> Result<String, AppError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("Stock symbol required".to_string()));
    }
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_compile() {
        let _router = router();
    }

    #[test]
    fn symbols_are_normalized_to_uppercase() {
        assert_eq!(normalize_symbol(" tcs ").unwrap(), "TCS");
    }

    #[test]
    fn blank_symbol_is_rejected() {
        assert!(normalize_symbol("   ").is_err());
    }
}
