use serde::{Deserialize, Serialize};

use super::calendar::Time;

/// A long-running goal with manual progress tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier assigned by the remote store
    pub id: u64,

    pub title: String,

    pub description: String,

    /// Completion percentage, 0–100 (values above 100 are pass-through)
    pub progress: u32,

    /// Optional target date
    #[serde(default)]
    pub target_date: Option<Time>,
}

impl Goal {
    /// A goal counts as completed once progress reaches 100%.
    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }
}
