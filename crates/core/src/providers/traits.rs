use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;

/// Trait abstraction for live quote providers.
///
/// The quote API (CoinGecko today) sits behind this trait so a dead or
/// rate-limited service can be swapped without touching the rest of the
/// codebase.
#[async_trait]
pub trait LivePriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current USD prices for a set of tickers.
    ///
    /// Returns uppercase symbol → USD price. The mapping may be partial:
    /// symbols the provider cannot quote are simply absent, and the
    /// profit/loss layer falls back to each entry's stored price.
    async fn fetch_prices(&self, symbols: &[String]) -> Result<HashMap<String, f64>, CoreError>;
}
