use serde::{Deserialize, Serialize};

/// How a dashboard section is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Count/figure tiles
    #[default]
    Stats,
    /// Fewer tiles plus a "Latest: …" line
    Recent,
}

/// One labeled figure in a section summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub label: String,
    pub value: String,
}

impl SummaryStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Computed summary of one dashboard section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub stats: Vec<SummaryStat>,

    /// Optional trailing line ("Latest: …", "Next: …")
    #[serde(default)]
    pub secondary: Option<String>,

    /// True when the section has no data at all
    pub is_empty: bool,
}

impl SectionSummary {
    /// Summary of a section with no data.
    pub fn empty() -> Self {
        Self {
            stats: Vec::new(),
            secondary: None,
            is_empty: true,
        }
    }
}
