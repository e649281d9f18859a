use serde::{Deserialize, Serialize};

use super::summary::SummaryMode;

/// Calendar grid granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Year,
    #[default]
    Month,
    Week,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Year => "year",
            CalendarView::Month => "month",
            CalendarView::Week => "week",
        }
    }

    /// Parse a stored preference value; unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "year" => Some(CalendarView::Year),
            "month" => Some(CalendarView::Month),
            "week" => Some(CalendarView::Week),
            _ => None,
        }
    }
}

/// Which budget items the budget summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetSummaryPeriod {
    /// Current local month only
    #[default]
    Month,
    /// Every item
    All,
}

impl BudgetSummaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetSummaryPeriod::Month => "month",
            BudgetSummaryPeriod::All => "all",
        }
    }

    /// Parse a stored preference value; unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "month" => Some(BudgetSummaryPeriod::Month),
            "all" => Some(BudgetSummaryPeriod::All),
            _ => None,
        }
    }
}

/// Dashboard section identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Tasks,
    Goals,
    Calendar,
    Budget,
}

impl SectionKey {
    /// Display order of the dashboard sections.
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Tasks,
        SectionKey::Goals,
        SectionKey::Calendar,
        SectionKey::Budget,
    ];
}

/// Per-section dashboard preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPreference {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub mode: SummaryMode,
}

fn default_enabled() -> bool {
    true
}

impl Default for SectionPreference {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: SummaryMode::Stats,
        }
    }
}

/// Dashboard section preferences. Every field defaults individually so a
/// partially stored blob merges with the defaults instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardPreferences {
    #[serde(default)]
    pub tasks: SectionPreference,

    #[serde(default)]
    pub goals: SectionPreference,

    #[serde(default)]
    pub calendar: SectionPreference,

    #[serde(default)]
    pub budget: SectionPreference,
}

impl DashboardPreferences {
    pub fn section(&self, key: SectionKey) -> &SectionPreference {
        match key {
            SectionKey::Tasks => &self.tasks,
            SectionKey::Goals => &self.goals,
            SectionKey::Calendar => &self.calendar,
            SectionKey::Budget => &self.budget,
        }
    }

    pub fn section_mut(&mut self, key: SectionKey) -> &mut SectionPreference {
        match key {
            SectionKey::Tasks => &mut self.tasks,
            SectionKey::Goals => &mut self.goals,
            SectionKey::Calendar => &mut self.calendar,
            SectionKey::Budget => &mut self.budget,
        }
    }
}
