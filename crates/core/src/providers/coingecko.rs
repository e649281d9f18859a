use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::LivePriceProvider;
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko quote provider for cryptocurrency prices.
///
/// - **Free**: no API key required on the public `/simple/price` endpoint.
/// - **Batching**: one request quotes the whole portfolio's symbol set.
///
/// CoinGecko addresses coins by lowercase ids ("bitcoin", "ethereum");
/// common tickers are mapped statically. Symbols outside the map are
/// skipped, which yields the partial mapping the aggregators tolerate.
pub struct CoinGeckoProvider {
    client: Client,
    /// Map from uppercase symbol (BTC) to CoinGecko coin id (bitcoin).
    symbol_map: HashMap<String, String>,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let mut symbol_map = HashMap::new();
        let common = vec![
            ("BTC", "bitcoin"),
            ("ETH", "ethereum"),
            ("ICP", "internet-computer"),
            ("USDT", "tether"),
            ("USDC", "usd-coin"),
            ("BNB", "binancecoin"),
            ("XRP", "ripple"),
            ("ADA", "cardano"),
            ("SOL", "solana"),
            ("DOGE", "dogecoin"),
            ("DOT", "polkadot"),
            ("MATIC", "matic-network"),
            ("AVAX", "avalanche-2"),
            ("LINK", "chainlink"),
            ("UNI", "uniswap"),
            ("ATOM", "cosmos"),
            ("LTC", "litecoin"),
            ("BCH", "bitcoin-cash"),
            ("XLM", "stellar"),
            ("ALGO", "algorand"),
        ];
        for (sym, id) in common {
            symbol_map.insert(sym.to_string(), id.to_string());
        }

        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            symbol_map,
        }
    }

    /// CoinGecko id for a ticker; `None` for symbols outside the map.
    pub fn coin_id(&self, symbol: &str) -> Option<&str> {
        self.symbol_map
            .get(&symbol.to_uppercase())
            .map(String::as_str)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct CurrencyQuote {
    usd: Option<f64>,
}

#[async_trait]
impl LivePriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_prices(&self, symbols: &[String]) -> Result<HashMap<String, f64>, CoreError> {
        // Resolve tickers to coin ids; unknown symbols are skipped
        let mut ids: Vec<&str> = Vec::new();
        let mut symbol_by_id: HashMap<&str, String> = HashMap::new();
        for symbol in symbols {
            let upper = symbol.to_uppercase();
            if let Some(id) = self.symbol_map.get(&upper) {
                symbol_by_id.insert(id.as_str(), upper);
                ids.push(id.as_str());
            }
        }
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        ids.sort_unstable();
        ids.dedup();

        let url = format!(
            "{BASE_URL}/simple/price?ids={}&vs_currencies=usd",
            ids.join(",")
        );

        let resp: HashMap<String, CurrencyQuote> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse price response: {e}"),
            })?;

        // Map coin ids back to the tickers the caller asked with
        let mut prices = HashMap::new();
        for (id, quote) in resp {
            if let (Some(symbol), Some(usd)) = (symbol_by_id.get(id.as_str()), quote.usd) {
                prices.insert(symbol.clone(), usd);
            }
        }

        Ok(prices)
    }
}
