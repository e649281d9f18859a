use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::preferences::{
    BudgetSummaryPeriod, CalendarView, DashboardPreferences, SectionKey,
};
use crate::models::summary::SummaryMode;

/// Storage key for the calendar grid view preference.
pub const CALENDAR_VIEW_KEY: &str = "calendar-view-preference";

/// Storage key for the budget summary period preference.
pub const BUDGET_SUMMARY_PERIOD_KEY: &str = "budget-summary-period";

/// Storage key for the dashboard section preferences (JSON blob).
pub const DASHBOARD_SUMMARY_KEY: &str = "dashboard-summary-preferences";

/// Injected key-value store backing the view preferences.
///
/// The web host implements this over browser local storage; tests and
/// native hosts use `MemoryPreferenceStore`. Preferences never live in
/// ambient global state.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Typed accessors over a raw preference store.
///
/// Missing or malformed values always fall back to the documented
/// defaults — a corrupted blob never surfaces as an error on the read path.
pub struct PreferenceManager {
    store: Box<dyn PreferenceStore>,
}

impl PreferenceManager {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    // ── Calendar view ───────────────────────────────────────────────

    pub fn calendar_view(&self) -> CalendarView {
        self.store
            .get(CALENDAR_VIEW_KEY)
            .as_deref()
            .and_then(CalendarView::parse)
            .unwrap_or_default()
    }

    pub fn set_calendar_view(&mut self, view: CalendarView) {
        self.store.set(CALENDAR_VIEW_KEY, view.as_str());
    }

    // ── Budget summary period ───────────────────────────────────────

    pub fn budget_summary_period(&self) -> BudgetSummaryPeriod {
        self.store
            .get(BUDGET_SUMMARY_PERIOD_KEY)
            .as_deref()
            .and_then(BudgetSummaryPeriod::parse)
            .unwrap_or_default()
    }

    pub fn set_budget_summary_period(&mut self, period: BudgetSummaryPeriod) {
        self.store.set(BUDGET_SUMMARY_PERIOD_KEY, period.as_str());
    }

    // ── Dashboard sections ──────────────────────────────────────────

    /// Stored dashboard preferences; a partial blob merges with the
    /// defaults through the per-field serde defaults.
    pub fn dashboard_preferences(&self) -> DashboardPreferences {
        self.store
            .get(DASHBOARD_SUMMARY_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn set_dashboard_preferences(
        &mut self,
        preferences: &DashboardPreferences,
    ) -> Result<(), CoreError> {
        let raw = serde_json::to_string(preferences)?;
        self.store.set(DASHBOARD_SUMMARY_KEY, &raw);
        Ok(())
    }

    /// Flip a section's visibility. Returns the updated preferences.
    pub fn toggle_section(
        &mut self,
        section: SectionKey,
    ) -> Result<DashboardPreferences, CoreError> {
        let mut preferences = self.dashboard_preferences();
        let pref = preferences.section_mut(section);
        pref.enabled = !pref.enabled;
        self.set_dashboard_preferences(&preferences)?;
        Ok(preferences)
    }

    /// Change a section's summary mode. Returns the updated preferences.
    pub fn set_summary_mode(
        &mut self,
        section: SectionKey,
        mode: SummaryMode,
    ) -> Result<DashboardPreferences, CoreError> {
        let mut preferences = self.dashboard_preferences();
        preferences.section_mut(section).mode = mode;
        self.set_dashboard_preferences(&preferences)?;
        Ok(preferences)
    }
}
