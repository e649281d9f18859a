use std::collections::{BTreeMap, HashMap};

use crate::models::crypto::CryptoEntry;
use crate::models::profit_loss::{AssetProfitLoss, PlStatus};

/// Computes unrealized profit/loss over the crypto portfolio.
///
/// Pure arithmetic — no I/O, no validation (entry fields are validated by
/// the form layer before they reach the core). The optional live-price map
/// is keyed by uppercased symbol; symbols without a quote fall back to the
/// entry's stored current price.
pub struct ProfitLossService;

impl ProfitLossService {
    pub fn new() -> Self {
        Self
    }

    /// Unrealized USD delta of a single entry:
    /// `(effective price − purchase price) × held units`.
    pub fn entry_profit_loss(&self, entry: &CryptoEntry, live_price: Option<f64>) -> f64 {
        let current = live_price.unwrap_or_else(|| entry.current_price_usd());
        (current - entry.purchase_price_usd()) * entry.units()
    }

    /// Per-asset profit/loss records, grouped by uppercased symbol and
    /// sorted descending by USD delta.
    ///
    /// Percent is against the group's invested basis (units × purchase
    /// price), 0 when nothing was invested. Grouping uses a `BTreeMap` and
    /// a stable sort so identical inputs always produce bit-identical
    /// output, including the order of P/L ties.
    pub fn asset_profit_loss(
        &self,
        entries: &[CryptoEntry],
        live_prices: Option<&HashMap<String, f64>>,
    ) -> Vec<AssetProfitLoss> {
        let mut groups: BTreeMap<String, (f64, f64)> = BTreeMap::new();

        for entry in entries {
            let symbol = entry.canonical_symbol();
            let live = live_prices.and_then(|prices| prices.get(&symbol).copied());
            let pl = self.entry_profit_loss(entry, live);
            let invested = entry.units() * entry.purchase_price_usd();

            let group = groups.entry(symbol).or_insert((0.0, 0.0));
            group.0 += pl;
            group.1 += invested;
        }

        let mut records: Vec<AssetProfitLoss> = groups
            .into_iter()
            .map(|(symbol, (profit_loss_usd, total_invested))| {
                let profit_loss_percent = if total_invested > 0.0 {
                    (profit_loss_usd / total_invested) * 100.0
                } else {
                    0.0
                };
                AssetProfitLoss {
                    symbol,
                    profit_loss_usd,
                    profit_loss_percent,
                    status: PlStatus::classify(profit_loss_usd),
                }
            })
            .collect();

        // Largest gain first
        records.sort_by(|a, b| {
            b.profit_loss_usd
                .partial_cmp(&a.profit_loss_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records
    }

    /// Portfolio-wide unrealized USD delta, independent of grouping.
    pub fn total_profit_loss(
        &self,
        entries: &[CryptoEntry],
        live_prices: Option<&HashMap<String, f64>>,
    ) -> f64 {
        entries
            .iter()
            .map(|entry| {
                let live =
                    live_prices.and_then(|prices| prices.get(&entry.canonical_symbol()).copied());
                self.entry_profit_loss(entry, live)
            })
            .sum()
    }
}

impl Default for ProfitLossService {
    fn default() -> Self {
        Self::new()
    }
}
