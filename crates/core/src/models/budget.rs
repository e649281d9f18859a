use serde::{Deserialize, Serialize};

use super::calendar::Time;

/// Direction of a budget item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetItemType {
    Income,
    Expense,
}

impl std::fmt::Display for BudgetItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetItemType::Income => write!(f, "Income"),
            BudgetItemType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    /// Unique identifier assigned by the remote store
    pub id: u64,

    /// Amount in USD cents (always positive; direction comes from `item_type`)
    #[serde(rename = "amount")]
    pub amount_cents: i64,

    pub description: String,

    /// Instant the item applies to (month bucketing uses its local day)
    pub date: Time,

    pub item_type: BudgetItemType,
}
