pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use errors::CoreError;
use models::budget::BudgetItem;
use models::calendar::{now_time, CalendarEntry, DayKey, Recurrence, Time};
use models::crypto::CryptoEntry;
use models::goal::Goal;
use models::preferences::{BudgetSummaryPeriod, CalendarView, DashboardPreferences, SectionKey};
use models::profit_loss::AssetProfitLoss;
use models::summary::{SectionSummary, SummaryMode};
use models::task::Task;
use providers::coingecko::CoinGeckoProvider;
use providers::traits::LivePriceProvider;
use services::calendar_service::CalendarService;
use services::live_price_service::LivePriceService;
use services::profit_loss_service::ProfitLossService;
use services::summary_service::SummaryService;
use storage::preferences::{MemoryPreferenceStore, PreferenceManager, PreferenceStore};

/// Main entry point for the LifeTrack core library.
///
/// The remote API owns the tracked entities; this struct holds only the
/// derivation services, the live-quote snapshot, and the view preferences.
/// Entity collections are passed into each call.
#[must_use]
pub struct LifeTracker {
    calendar_service: CalendarService,
    profit_loss_service: ProfitLossService,
    summary_service: SummaryService,
    live_price_service: LivePriceService,
    preferences: PreferenceManager,
}

impl std::fmt::Debug for LifeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeTracker")
            .field("price_provider", &self.live_price_service.provider_name())
            .field("calendar_view", &self.preferences.calendar_view())
            .finish()
    }
}

impl LifeTracker {
    /// Create a tracker with the default CoinGecko quote provider and an
    /// in-memory preference store.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(CoinGeckoProvider::new()),
            Box::new(MemoryPreferenceStore::new()),
        )
    }

    /// Create a tracker with injected collaborators — a custom quote
    /// provider and/or a host-backed preference store.
    pub fn with_parts(
        provider: Box<dyn LivePriceProvider>,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            calendar_service: CalendarService::new(),
            profit_loss_service: ProfitLossService::new(),
            summary_service: SummaryService::new(),
            live_price_service: LivePriceService::new(provider),
            preferences: PreferenceManager::new(store),
        }
    }

    // ── Calendar ────────────────────────────────────────────────────

    /// Expand a recurrence rule into the day keys falling inside
    /// `[range_start, range_end]` (inclusive).
    #[must_use]
    pub fn expand_occurrences(
        &self,
        start_time: Time,
        recurrence: Recurrence,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Vec<DayKey> {
        self.calendar_service
            .expand_occurrences(start_time, recurrence, range_start, range_end)
    }

    /// The set of days carrying a presence indicator in the calendar grids.
    /// Omitted bounds default to a rolling two-year window around today.
    #[must_use]
    pub fn scheduled_days(
        &self,
        entries: &[CalendarEntry],
        range_start: Option<NaiveDate>,
        range_end: Option<NaiveDate>,
    ) -> HashSet<DayKey> {
        self.calendar_service
            .scheduled_days(entries, range_start, range_end)
    }

    // ── Profit / Loss ───────────────────────────────────────────────

    /// Unrealized USD delta of a single entry, optionally against a live
    /// quote instead of the stored current price.
    #[must_use]
    pub fn entry_profit_loss(&self, entry: &CryptoEntry, live_price: Option<f64>) -> f64 {
        self.profit_loss_service.entry_profit_loss(entry, live_price)
    }

    /// Per-asset profit/loss records, sorted descending by USD delta.
    #[must_use]
    pub fn asset_profit_loss(
        &self,
        entries: &[CryptoEntry],
        live_prices: Option<&HashMap<String, f64>>,
    ) -> Vec<AssetProfitLoss> {
        self.profit_loss_service.asset_profit_loss(entries, live_prices)
    }

    /// Portfolio-wide unrealized USD delta.
    #[must_use]
    pub fn total_portfolio_profit_loss(
        &self,
        entries: &[CryptoEntry],
        live_prices: Option<&HashMap<String, f64>>,
    ) -> f64 {
        self.profit_loss_service.total_profit_loss(entries, live_prices)
    }

    /// Fetch (or serve from the snapshot) live USD quotes for a symbol set.
    pub async fn refresh_live_prices(
        &mut self,
        symbols: &[String],
    ) -> Result<HashMap<String, f64>, CoreError> {
        self.live_price_service.get_prices(symbols).await
    }

    /// Per-asset profit/loss against live quotes for the portfolio's
    /// symbols. Symbols the provider cannot quote fall back to stored
    /// prices.
    pub async fn asset_profit_loss_live(
        &mut self,
        entries: &[CryptoEntry],
    ) -> Result<Vec<AssetProfitLoss>, CoreError> {
        let symbols: Vec<String> = entries.iter().map(|e| e.canonical_symbol()).collect();
        let prices = self.live_price_service.get_prices(&symbols).await?;
        Ok(self.profit_loss_service.asset_profit_loss(entries, Some(&prices)))
    }

    /// Portfolio-wide profit/loss against live quotes.
    pub async fn total_portfolio_profit_loss_live(
        &mut self,
        entries: &[CryptoEntry],
    ) -> Result<f64, CoreError> {
        let symbols: Vec<String> = entries.iter().map(|e| e.canonical_symbol()).collect();
        let prices = self.live_price_service.get_prices(&symbols).await?;
        Ok(self.profit_loss_service.total_profit_loss(entries, Some(&prices)))
    }

    /// Drop the live-quote snapshot so the next call refetches.
    pub fn invalidate_live_prices(&mut self) {
        self.live_price_service.invalidate();
    }

    // ── Dashboard summaries ─────────────────────────────────────────

    #[must_use]
    pub fn tasks_summary(&self, tasks: &[Task], mode: SummaryMode) -> SectionSummary {
        self.summary_service.tasks_summary(tasks, mode, now_time())
    }

    #[must_use]
    pub fn goals_summary(&self, goals: &[Goal], mode: SummaryMode) -> SectionSummary {
        self.summary_service.goals_summary(goals, mode)
    }

    #[must_use]
    pub fn calendar_summary(&self, entries: &[CalendarEntry], mode: SummaryMode) -> SectionSummary {
        self.summary_service
            .calendar_summary(entries, mode, now_time())
    }

    /// Budget summary over the stored period preference (current month by
    /// default).
    #[must_use]
    pub fn budget_summary(&self, items: &[BudgetItem], mode: SummaryMode) -> SectionSummary {
        self.summary_service.budget_summary(
            items,
            mode,
            self.preferences.budget_summary_period(),
            now_time(),
        )
    }

    /// Summaries of the enabled dashboard sections, in display order, each
    /// rendered in its preferred mode.
    #[must_use]
    pub fn dashboard_summaries(
        &self,
        tasks: &[Task],
        goals: &[Goal],
        entries: &[CalendarEntry],
        items: &[BudgetItem],
    ) -> Vec<(SectionKey, SectionSummary)> {
        let preferences = self.preferences.dashboard_preferences();
        let now = now_time();

        SectionKey::ALL
            .iter()
            .filter(|key| preferences.section(**key).enabled)
            .map(|key| {
                let mode = preferences.section(*key).mode;
                let summary = match key {
                    SectionKey::Tasks => self.summary_service.tasks_summary(tasks, mode, now),
                    SectionKey::Goals => self.summary_service.goals_summary(goals, mode),
                    SectionKey::Calendar => {
                        self.summary_service.calendar_summary(entries, mode, now)
                    }
                    SectionKey::Budget => self.summary_service.budget_summary(
                        items,
                        mode,
                        self.preferences.budget_summary_period(),
                        now,
                    ),
                };
                (*key, summary)
            })
            .collect()
    }

    // ── View preferences ────────────────────────────────────────────

    #[must_use]
    pub fn calendar_view(&self) -> CalendarView {
        self.preferences.calendar_view()
    }

    pub fn set_calendar_view(&mut self, view: CalendarView) {
        self.preferences.set_calendar_view(view);
    }

    #[must_use]
    pub fn budget_summary_period(&self) -> BudgetSummaryPeriod {
        self.preferences.budget_summary_period()
    }

    pub fn set_budget_summary_period(&mut self, period: BudgetSummaryPeriod) {
        self.preferences.set_budget_summary_period(period);
    }

    #[must_use]
    pub fn dashboard_preferences(&self) -> DashboardPreferences {
        self.preferences.dashboard_preferences()
    }

    pub fn set_dashboard_preferences(
        &mut self,
        preferences: &DashboardPreferences,
    ) -> Result<(), CoreError> {
        self.preferences.set_dashboard_preferences(preferences)
    }

    /// Flip a dashboard section's visibility.
    pub fn toggle_section(
        &mut self,
        section: SectionKey,
    ) -> Result<DashboardPreferences, CoreError> {
        self.preferences.toggle_section(section)
    }

    /// Change a dashboard section's summary mode.
    pub fn set_summary_mode(
        &mut self,
        section: SectionKey,
        mode: SummaryMode,
    ) -> Result<DashboardPreferences, CoreError> {
        self.preferences.set_summary_mode(section, mode)
    }
}

impl Default for LifeTracker {
    fn default() -> Self {
        Self::new()
    }
}
