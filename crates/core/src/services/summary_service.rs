use chrono::Datelike;

use crate::models::budget::{BudgetItem, BudgetItemType};
use crate::models::calendar::{day_key_for, CalendarEntry, Time};
use crate::models::goal::Goal;
use crate::models::money::format_cents_usd;
use crate::models::preferences::BudgetSummaryPeriod;
use crate::models::summary::{SectionSummary, SummaryMode, SummaryStat};
use crate::models::task::Task;

/// Computes the per-section dashboard summaries.
///
/// All methods are pure; "now" is passed in by the caller so the same
/// inputs always produce the same summary.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Task counts, plus the overdue count when it is non-zero.
    pub fn tasks_summary(&self, tasks: &[Task], mode: SummaryMode, now: Time) -> SectionSummary {
        if tasks.is_empty() {
            return SectionSummary::empty();
        }

        let completed = tasks.iter().filter(|t| t.completed).count();

        match mode {
            SummaryMode::Stats => {
                let pending = tasks.len() - completed;
                let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();

                let mut stats = vec![
                    SummaryStat::new("Total", tasks.len().to_string()),
                    SummaryStat::new("Completed", completed.to_string()),
                    SummaryStat::new("Pending", pending.to_string()),
                ];
                if overdue > 0 {
                    stats.push(SummaryStat::new("Overdue", overdue.to_string()));
                }

                SectionSummary {
                    stats,
                    secondary: None,
                    is_empty: false,
                }
            }
            SummaryMode::Recent => {
                let latest = tasks.iter().max_by_key(|t| t.created_at);

                SectionSummary {
                    stats: vec![
                        SummaryStat::new("Total", tasks.len().to_string()),
                        SummaryStat::new("Completed", completed.to_string()),
                    ],
                    secondary: latest.map(|t| format!("Latest: {}", t.description)),
                    is_empty: false,
                }
            }
        }
    }

    /// Goal counts and average progress (rounded percent).
    pub fn goals_summary(&self, goals: &[Goal], mode: SummaryMode) -> SectionSummary {
        if goals.is_empty() {
            return SectionSummary::empty();
        }

        let avg_progress = (goals.iter().map(|g| f64::from(g.progress)).sum::<f64>()
            / goals.len() as f64)
            .round() as i64;

        match mode {
            SummaryMode::Stats => {
                let completed = goals.iter().filter(|g| g.is_completed()).count();

                SectionSummary {
                    stats: vec![
                        SummaryStat::new("Total", goals.len().to_string()),
                        SummaryStat::new("Completed", completed.to_string()),
                        SummaryStat::new("Avg Progress", format!("{avg_progress}%")),
                    ],
                    secondary: None,
                    is_empty: false,
                }
            }
            SummaryMode::Recent => {
                let latest = goals.last();

                SectionSummary {
                    stats: vec![
                        SummaryStat::new("Total", goals.len().to_string()),
                        SummaryStat::new("Avg Progress", format!("{avg_progress}%")),
                    ],
                    secondary: latest.map(|g| format!("Latest: {}", g.title)),
                    is_empty: false,
                }
            }
        }
    }

    /// Entry counts for today and the future; in recent mode, the next
    /// upcoming entry.
    pub fn calendar_summary(
        &self,
        entries: &[CalendarEntry],
        mode: SummaryMode,
        now: Time,
    ) -> SectionSummary {
        if entries.is_empty() {
            return SectionSummary::empty();
        }

        let today = day_key_for(now);
        let upcoming: Vec<&CalendarEntry> =
            entries.iter().filter(|e| e.start_time > now).collect();
        let today_count = entries.iter().filter(|e| e.start_day() == today).count();

        match mode {
            SummaryMode::Stats => SectionSummary {
                stats: vec![
                    SummaryStat::new("Total", entries.len().to_string()),
                    SummaryStat::new("Today", today_count.to_string()),
                    SummaryStat::new("Upcoming", upcoming.len().to_string()),
                ],
                secondary: None,
                is_empty: false,
            },
            SummaryMode::Recent => {
                let next = upcoming.iter().min_by_key(|e| e.start_time);

                SectionSummary {
                    stats: vec![
                        SummaryStat::new("Total", entries.len().to_string()),
                        SummaryStat::new("Upcoming", upcoming.len().to_string()),
                    ],
                    secondary: Some(match next {
                        Some(e) => format!("Next: {} on {}", e.title, e.start_day()),
                        None => "No upcoming events".to_string(),
                    }),
                    is_empty: false,
                }
            }
        }
    }

    /// Income, expenses, and net balance over the selected period,
    /// formatted from integer cents.
    pub fn budget_summary(
        &self,
        items: &[BudgetItem],
        mode: SummaryMode,
        period: BudgetSummaryPeriod,
        now: Time,
    ) -> SectionSummary {
        if items.is_empty() {
            return SectionSummary::empty();
        }

        let today = day_key_for(now);
        let in_period: Vec<&BudgetItem> = items
            .iter()
            .filter(|item| match period {
                BudgetSummaryPeriod::Month => {
                    let day = day_key_for(item.date);
                    day.year() == today.year() && day.month() == today.month()
                }
                BudgetSummaryPeriod::All => true,
            })
            .collect();

        let income: i64 = in_period
            .iter()
            .filter(|item| item.item_type == BudgetItemType::Income)
            .map(|item| item.amount_cents)
            .sum();
        let expenses: i64 = in_period
            .iter()
            .filter(|item| item.item_type == BudgetItemType::Expense)
            .map(|item| item.amount_cents)
            .sum();
        let net = income - expenses;

        match mode {
            SummaryMode::Stats => SectionSummary {
                stats: vec![
                    SummaryStat::new("Income", format_cents_usd(income)),
                    SummaryStat::new("Expenses", format_cents_usd(expenses)),
                    SummaryStat::new("Net", format_cents_usd(net)),
                ],
                secondary: None,
                is_empty: false,
            },
            SummaryMode::Recent => {
                let count_label = match period {
                    BudgetSummaryPeriod::Month => "This Month",
                    BudgetSummaryPeriod::All => "Items",
                };
                let latest = items.iter().max_by_key(|item| item.date);

                SectionSummary {
                    stats: vec![
                        SummaryStat::new(count_label, in_period.len().to_string()),
                        SummaryStat::new("Net", format_cents_usd(net)),
                    ],
                    secondary: latest.map(|item| {
                        format!(
                            "Latest: {} ({})",
                            item.description,
                            format_cents_usd(item.amount_cents)
                        )
                    }),
                    is_empty: false,
                }
            }
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
