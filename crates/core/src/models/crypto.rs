use serde::{Deserialize, Serialize};

use super::calendar::Time;
use super::money::{cents_to_usd, micro_units_to_units};

/// A crypto holding as stored by the remote API.
///
/// The transport layer avoids floating point entirely: the held quantity is
/// scaled to integer micro-units (×1,000,000) and both prices are integer
/// USD cents. Conversion to human units happens only in the derived-display
/// layer, via `models::money`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoEntry {
    /// Unique identifier assigned by the remote store
    pub id: u64,

    /// Asset ticker as entered by the user; aggregation keys uppercase it
    pub symbol: String,

    /// Held quantity in micro-units (1 unit = 1,000,000 micro-units)
    pub amount: i64,

    /// Purchase price in USD cents
    pub purchase_price_cents: i64,

    /// Last stored price in USD cents; the fallback when no live quote
    /// is available for the symbol
    pub current_price_cents: i64,

    pub created_at: Time,

    pub updated_at: Time,
}

impl CryptoEntry {
    /// Canonical aggregation key: the uppercased ticker.
    pub fn canonical_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Held quantity in whole units.
    pub fn units(&self) -> f64 {
        micro_units_to_units(self.amount)
    }

    /// Purchase price in USD.
    pub fn purchase_price_usd(&self) -> f64 {
        cents_to_usd(self.purchase_price_cents)
    }

    /// Stored current price in USD.
    pub fn current_price_usd(&self) -> f64 {
        cents_to_usd(self.current_price_cents)
    }
}
