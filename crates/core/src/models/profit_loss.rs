use serde::{Deserialize, Serialize};

/// Deadband around zero inside which a position counts as flat.
/// Absorbs floating-point noise from the cents/micro-unit conversions.
pub const PL_FLAT_DEADBAND_USD: f64 = 0.01;

/// Three-way classification of an unrealized profit/loss figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlStatus {
    Positive,
    Negative,
    Flat,
}

impl PlStatus {
    /// Classify a USD delta using the ±`PL_FLAT_DEADBAND_USD` deadband.
    pub fn classify(profit_loss_usd: f64) -> Self {
        if profit_loss_usd > PL_FLAT_DEADBAND_USD {
            PlStatus::Positive
        } else if profit_loss_usd < -PL_FLAT_DEADBAND_USD {
            PlStatus::Negative
        } else {
            PlStatus::Flat
        }
    }
}

impl std::fmt::Display for PlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlStatus::Positive => write!(f, "positive"),
            PlStatus::Negative => write!(f, "negative"),
            PlStatus::Flat => write!(f, "flat"),
        }
    }
}

/// Unrealized profit/loss of all entries sharing one asset symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfitLoss {
    /// Uppercased ticker the group is keyed by
    pub symbol: String,

    /// Summed USD delta across the group's entries
    pub profit_loss_usd: f64,

    /// 100 × profit_loss_usd / total invested basis; 0 when nothing
    /// was invested
    pub profit_loss_percent: f64,

    pub status: PlStatus,
}
