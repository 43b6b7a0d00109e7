//! Wire-contract tests for the prediction API.
//!
//! These tests validate the response envelope the frontend consumes:
//! key names, enum spellings, and the arithmetic the API promises.
//! Full request-path tests against the router live beside the app module;
//! handler logic is covered by the service unit tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictionEnvelope {
    success: bool,
    symbol: String,
    current_price: f64,
    predicted_price: f64,
    price_change: f64,
    price_change_percent: f64,
    direction: String,
    confidence: String,
    data_points: u32,
    message: String,
}

fn sample() -> PredictionEnvelope {
    PredictionEnvelope {
        success: true,
        symbol: "TCS".to_string(),
        current_price: 3850.50,
        predicted_price: 3890.12,
        price_change: 39.62,
        price_change_percent: 1.03,
        direction: "UP".to_string(),
        confidence: "Medium".to_string(),
        data_points: 100,
        message: "Prediction based on live market quote".to_string(),
    }
}

#[test]
fn envelope_uses_camel_case_keys() {
    let json = serde_json::to_value(sample()).unwrap();
    let object = json.as_object().unwrap();

    for key in [
        "success",
        "symbol",
        "currentPrice",
        "predictedPrice",
        "priceChange",
        "priceChangePercent",
        "direction",
        "confidence",
        "dataPoints",
        "message",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), 10);
}

#[test]
fn envelope_round_trips() {
    let json = serde_json::to_string(&sample()).unwrap();
    let back: PredictionEnvelope = serde_json::from_str(&json).unwrap();
    assert_eq!(back.symbol, "TCS");
    assert_eq!(back.current_price, 3850.50);
    assert_eq!(back.direction, "UP");
}

#[test]
fn error_envelope_shape() {
    let error = serde_json::json!({
        "success": false,
        "message": "Stock symbol required",
    });
    assert_eq!(error["success"], false);
    assert_eq!(error["message"], "Stock symbol required");
}

#[test]
fn promised_arithmetic_holds_for_sample() {
    let sample = sample();
    let change = sample.predicted_price - sample.current_price;
    let percent = change / sample.current_price * 100.0;

    assert!((sample.price_change - round2(change)).abs() < 1e-9);
    assert!((sample.price_change_percent - round2(percent)).abs() < 1e-9);
    assert_eq!(sample.direction, if change > 0.0 { "UP" } else { "DOWN" });
}

#[test]
fn direction_zero_change_is_down() {
    let change = 0.0_f64;
    let direction = if change > 0.0 { "UP" } else { "DOWN" };
    assert_eq!(direction, "DOWN");
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
