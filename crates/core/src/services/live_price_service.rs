use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use crate::errors::CoreError;
use crate::providers::traits::LivePriceProvider;

/// How long a fetched snapshot keeps serving reads before it counts
/// as stale.
pub const LIVE_PRICE_STALENESS: Duration = Duration::from_secs(30);

/// Extra fetch attempts after a failure.
pub const LIVE_PRICE_MAX_RETRIES: u32 = 2;

struct PriceSnapshot {
    prices: HashMap<String, f64>,
    symbols: BTreeSet<String>,
    fetched_at: Instant,
}

/// Fetches live USD quotes through a provider, with snapshot caching.
///
/// The aggregators consume the returned map as a synchronous snapshot; a
/// partial map (symbols the provider cannot quote) is expected and fine —
/// the profit/loss layer falls back to stored prices.
pub struct LivePriceService {
    provider: Box<dyn LivePriceProvider>,
    snapshot: Option<PriceSnapshot>,
}

impl LivePriceService {
    pub fn new(provider: Box<dyn LivePriceProvider>) -> Self {
        Self {
            provider,
            snapshot: None,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Current USD quotes for `symbols` (normalized to uppercase,
    /// deduplicated).
    ///
    /// Serves the cached snapshot while it is fresher than
    /// `LIVE_PRICE_STALENESS` and covers the requested symbol set;
    /// otherwise fetches, retrying up to `LIVE_PRICE_MAX_RETRIES` more
    /// times on failure.
    pub async fn get_prices(
        &mut self,
        symbols: &[String],
    ) -> Result<HashMap<String, f64>, CoreError> {
        let requested: BTreeSet<String> = symbols
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        if requested.is_empty() {
            return Ok(HashMap::new());
        }

        if let Some(snapshot) = &self.snapshot {
            if snapshot.fetched_at.elapsed() < LIVE_PRICE_STALENESS
                && requested.is_subset(&snapshot.symbols)
            {
                return Ok(snapshot.prices.clone());
            }
        }

        let normalized: Vec<String> = requested.iter().cloned().collect();
        let mut last_error = None;

        for attempt in 0..=LIVE_PRICE_MAX_RETRIES {
            match self.provider.fetch_prices(&normalized).await {
                Ok(prices) => {
                    if let Some((symbol, price)) =
                        prices.iter().find(|(_, p)| !p.is_finite() || **p < 0.0)
                    {
                        last_error = Some(CoreError::Api {
                            provider: self.provider.name().to_string(),
                            message: format!(
                                "Invalid price returned for {symbol}: {price} (must be finite and non-negative)"
                            ),
                        });
                        continue;
                    }

                    self.snapshot = Some(PriceSnapshot {
                        prices: prices.clone(),
                        symbols: requested,
                        fetched_at: Instant::now(),
                    });
                    return Ok(prices);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        provider = self.provider.name(),
                        error = %e,
                        "live price fetch failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| CoreError::Network("live price fetch failed".into())))
    }

    /// Current USD quote for a single symbol.
    /// Unlike the bulk call, a symbol the provider cannot quote is an error.
    pub async fn get_price(&mut self, symbol: &str) -> Result<f64, CoreError> {
        let upper = symbol.trim().to_uppercase();
        let prices = self.get_prices(std::slice::from_ref(&upper)).await?;
        prices
            .get(&upper)
            .copied()
            .ok_or(CoreError::PriceNotAvailable { symbol: upper })
    }

    /// Last fetched snapshot, regardless of freshness.
    pub fn cached_prices(&self) -> Option<&HashMap<String, f64>> {
        self.snapshot.as_ref().map(|s| &s.prices)
    }

    /// Drop the snapshot so the next call refetches.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }
}
