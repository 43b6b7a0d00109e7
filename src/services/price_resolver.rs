use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::external::quote_provider::QuoteProvider;

// Synthetic tier constants: char-code sum folded onto a base price, so any
// symbol maps to a stable price in [2800, 3300).
const SYNTHETIC_BASE_PRICE: f64 = 2800.0;
const SYNTHETIC_PRICE_SPAN: u64 = 500;

/// Which resolution tier produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    External,
    StaticTable,
    Synthetic,
}

/// A usable current price for a symbol. Computed once per request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ResolvedPrice {
    pub symbol: String,
    pub price: f64,
    pub source: PriceSource,
}

/// Resolves a current price through an ordered fallback chain:
/// live quote, then the reference price table, then a synthetic price
/// derived from the symbol text. Each tier is attempted exactly once, and
/// the last tier cannot fail, so `resolve` always returns a price.
pub struct PriceResolver {
    provider: Arc<dyn QuoteProvider>,
    reference_prices: HashMap<String, f64>,
}

impl PriceResolver {
    pub fn new(provider: Arc<dyn QuoteProvider>, reference_prices: HashMap<String, f64>) -> Self {
        Self {
            provider,
            reference_prices,
        }
    }

    pub async fn resolve(&self, symbol: &str) -> ResolvedPrice {
        if let Some(price) = self.attempt_external(symbol).await {
            return ResolvedPrice {
                symbol: symbol.to_string(),
                price,
                source: PriceSource::External,
            };
        }

        if let Some(price) = self.lookup_reference(symbol) {
            warn!("Upstream quote unavailable for {}, using reference price table", symbol);
            return ResolvedPrice {
                symbol: symbol.to_string(),
                price,
                source: PriceSource::StaticTable,
            };
        }

        warn!("No reference price for {}, synthesizing a demo price", symbol);
        ResolvedPrice {
            symbol: symbol.to_string(),
            price: Self::synthesize(symbol),
            source: PriceSource::Synthetic,
        }
    }

    async fn attempt_external(&self, symbol: &str) -> Option<f64> {
        match self.provider.fetch_quote(symbol).await {
            Ok(quote) if quote.price.is_finite() && quote.price > 0.0 => {
                debug!("Live quote for {}: {}", symbol, quote.price);
                Some(quote.price)
            }
            Ok(quote) => {
                warn!("Upstream quote for {} is unusable ({})", symbol, quote.price);
                None
            }
            Err(e) => {
                warn!("Upstream quote failed for {}: {}", symbol, e);
                None
            }
        }
    }

    fn lookup_reference(&self, symbol: &str) -> Option<f64> {
        self.reference_prices.get(symbol).copied()
    }

    /// Deterministic demo price: same symbol, same price, every call.
    fn synthesize(symbol: &str) -> f64 {
        let char_sum: u64 = symbol.chars().map(|c| c as u64).sum();
        SYNTHETIC_BASE_PRICE + (char_sum % SYNTHETIC_PRICE_SPAN) as f64
    }
}
