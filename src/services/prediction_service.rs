use rand::Rng;
use tracing::info;

use crate::models::{Confidence, Direction, PredictionResult};
use crate::services::price_resolver::{PriceSource, ResolvedPrice};

// Predicted change is bounded to ±2% of the current price under both
// policies.
const MAX_CHANGE_PERCENT: f64 = 2.0;

/// How repeated predictions for the same symbol behave.
///
/// `Deterministic` hashes the symbol into the bounded percentage range, so
/// the same symbol always yields the same prediction. `Randomized` draws a
/// fresh offset per call. Selected once at startup via `PREDICTION_POLICY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionPolicy {
    Deterministic,
    Randomized,
}

impl PredictionPolicy {
    pub fn from_env() -> Self {
        let policy = std::env::var("PREDICTION_POLICY").unwrap_or_default();
        match policy.to_lowercase().as_str() {
            "randomized" => Self::Randomized,
            _ => Self::Deterministic,
        }
    }
}

pub struct PredictionService {
    policy: PredictionPolicy,
}

impl PredictionService {
    pub fn new(policy: PredictionPolicy) -> Self {
        Self { policy }
    }

    /// Compute a next-value estimate for a resolved price and package it
    /// into the response envelope.
    pub fn predict(&self, resolved: &ResolvedPrice) -> PredictionResult {
        let change_percent = match self.policy {
            PredictionPolicy::Deterministic => deterministic_offset(&resolved.symbol),
            PredictionPolicy::Randomized => {
                rand::rng().random_range(-MAX_CHANGE_PERCENT..=MAX_CHANGE_PERCENT)
            }
        };

        let predicted_price = round2(resolved.price * (1.0 + change_percent / 100.0));

        info!(
            "Prediction for {}: {:.2} -> {:.2}",
            resolved.symbol, resolved.price, predicted_price
        );

        assemble(
            &resolved.symbol,
            round2(resolved.price),
            predicted_price,
            confidence_for(resolved.source),
            data_points_for(resolved.source),
            tier_message(resolved.source),
        )
    }
}

/// Pure assembly of the prediction envelope: derives change, percentage and
/// direction from the two prices. Same inputs, same output, always.
pub fn assemble(
    symbol: &str,
    current_price: f64,
    predicted_price: f64,
    confidence: Confidence,
    data_points: u32,
    message: String,
) -> PredictionResult {
    let raw_change = predicted_price - current_price;
    let price_change = round2(raw_change);
    let price_change_percent = round2(raw_change / current_price * 100.0);

    let direction = if raw_change > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    PredictionResult {
        success: true,
        symbol: symbol.to_string(),
        current_price,
        predicted_price,
        price_change,
        price_change_percent,
        direction,
        confidence,
        data_points,
        message,
    }
}

/// Map the symbol's char-code sum onto [-2.00, +2.00] in basis-point steps.
fn deterministic_offset(symbol: &str) -> f64 {
    let char_sum: u64 = symbol.chars().map(|c| c as u64).sum();
    let steps = (MAX_CHANGE_PERCENT * 200.0) as u64 + 1;
    (char_sum % steps) as f64 / 100.0 - MAX_CHANGE_PERCENT
}

fn confidence_for(source: PriceSource) -> Confidence {
    match source {
        PriceSource::External | PriceSource::StaticTable => Confidence::Medium,
        PriceSource::Synthetic => Confidence::Demo,
    }
}

// Informational only. A live quote is a single data point; table-backed
// predictions report a nominal history length.
fn data_points_for(source: PriceSource) -> u32 {
    match source {
        PriceSource::External => 1,
        PriceSource::StaticTable => 100,
        PriceSource::Synthetic => 0,
    }
}

fn tier_message(source: PriceSource) -> String {
    match source {
        PriceSource::External => "Prediction based on live market quote".to_string(),
        PriceSource::StaticTable => {
            "Upstream market data unavailable. Prediction based on reference price table"
                .to_string()
        }
        PriceSource::Synthetic => "Demo prediction mode".to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(symbol: &str, price: f64, source: PriceSource) -> ResolvedPrice {
        ResolvedPrice {
            symbol: symbol.to_string(),
            price,
            source,
        }
    }

    #[test]
    fn deterministic_policy_is_stable_per_symbol() {
        let service = PredictionService::new(PredictionPolicy::Deterministic);
        let input = resolved("TCS", 3850.50, PriceSource::StaticTable);
        let first = service.predict(&input);
        let second = service.predict(&input);
        assert_eq!(first.predicted_price, second.predicted_price);
        assert_eq!(first.direction, second.direction);
    }

    #[test]
    fn deterministic_offset_stays_bounded() {
        for symbol in ["TCS", "ZZZZ", "RELIANCE", "A", "ICICIBANK"] {
            let offset = deterministic_offset(symbol);
            assert!((-MAX_CHANGE_PERCENT..=MAX_CHANGE_PERCENT).contains(&offset));
        }
    }

    #[test]
    fn randomized_policy_stays_bounded() {
        let service = PredictionService::new(PredictionPolicy::Randomized);
        let input = resolved("TCS", 1000.0, PriceSource::External);
        for _ in 0..50 {
            let result = service.predict(&input);
            assert!(result.price_change_percent.abs() <= MAX_CHANGE_PERCENT + 0.01);
        }
    }

    #[test]
    fn direction_is_up_only_for_positive_change() {
        let up = assemble("TCS", 100.0, 101.0, Confidence::Medium, 1, String::new());
        assert_eq!(up.direction, Direction::Up);

        let down = assemble("TCS", 100.0, 99.0, Confidence::Medium, 1, String::new());
        assert_eq!(down.direction, Direction::Down);

        // Zero change counts as DOWN.
        let flat = assemble("TCS", 100.0, 100.0, Confidence::Medium, 1, String::new());
        assert_eq!(flat.direction, Direction::Down);
    }

    #[test]
    fn percent_change_matches_formula() {
        let result = assemble("TCS", 200.0, 203.0, Confidence::Medium, 1, String::new());
        assert_eq!(result.price_change, 3.0);
        assert_eq!(result.price_change_percent, 1.5);
    }

    #[test]
    fn outputs_are_rounded_to_two_decimals() {
        let result = assemble("TCS", 3.0, 3.333333, Confidence::Demo, 0, String::new());
        assert_eq!(result.predicted_price, 3.333333); // assemble trusts its inputs
        assert_eq!(result.price_change, 0.33);
        assert_eq!(result.price_change_percent, 11.11);
    }

    #[test]
    fn confidence_follows_price_source() {
        assert_eq!(confidence_for(PriceSource::External), Confidence::Medium);
        assert_eq!(confidence_for(PriceSource::StaticTable), Confidence::Medium);
        assert_eq!(confidence_for(PriceSource::Synthetic), Confidence::Demo);
    }

    #[test]
    fn synthetic_tier_reports_demo_mode() {
        let service = PredictionService::new(PredictionPolicy::Deterministic);
        let result = service.predict(&resolved("ZZZZ", 2800.0, PriceSource::Synthetic));
        assert_eq!(result.confidence, Confidence::Demo);
        assert_eq!(result.data_points, 0);
        assert_eq!(result.message, "Demo prediction mode");
    }

    #[test]
    fn assembly_is_idempotent_down_to_the_bytes() {
        let a = assemble("TCS", 3850.50, 3890.12, Confidence::Medium, 100, "m".into());
        let b = assemble("TCS", 3850.50, 3890.12, Confidence::Medium, 100, "m".into());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
