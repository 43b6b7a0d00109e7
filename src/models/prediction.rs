use serde::{Deserialize, Serialize};

/// Expected movement of the predicted price relative to the current price.
///
/// A zero change counts as DOWN: direction is UP only for a strictly
/// positive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

/// Informational tag for how trustworthy the underlying price source is.
/// Not a statistical measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
    Demo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub success: bool,
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub direction: Direction,
    pub confidence: Confidence,
    pub data_points: u32,
    pub message: String,
}

/// Status of the (external) model pipeline for a symbol. The pipeline is not
/// wired into this service, so no symbol ever reports as trained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionStatus {
    pub success: bool,
    pub symbol: String,
    pub model_trained: bool,
    pub data_processed: bool,
    pub ready: bool,
    pub message: String,
}

impl PredictionStatus {
    pub fn untrained(symbol: String) -> Self {
        Self {
            success: true,
            symbol,
            model_trained: false,
            data_processed: false,
            ready: false,
            message: "Model not trained. Predictions are served from the demo fallback chain."
                .to_string(),
        }
    }
}
