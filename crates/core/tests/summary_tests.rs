// ═══════════════════════════════════════════════════════════════════
// Summary Tests — dashboard section computations
// ═══════════════════════════════════════════════════════════════════

use chrono::{Local, TimeZone};

use lifetrack_core::models::budget::{BudgetItem, BudgetItemType};
use lifetrack_core::models::calendar::{CalendarEntry, Time};
use lifetrack_core::models::goal::Goal;
use lifetrack_core::models::preferences::BudgetSummaryPeriod;
use lifetrack_core::models::summary::{SectionSummary, SummaryMode};
use lifetrack_core::models::task::{Task, TaskType};
use lifetrack_core::services::summary_service::SummaryService;

fn ts(y: i32, m: u32, day: u32) -> Time {
    Local
        .with_ymd_and_hms(y, m, day, 12, 0, 0)
        .unwrap()
        .timestamp_nanos_opt()
        .unwrap()
}

/// Fixed "now" used throughout: 2024-06-15 local noon.
fn now() -> Time {
    ts(2024, 6, 15)
}

fn task(id: u64, completed: bool, due_date: Option<Time>, created_at: Time) -> Task {
    Task {
        id,
        description: format!("task-{id}"),
        completed,
        due_date,
        task_type: TaskType::Daily,
        created_at,
    }
}

fn goal(id: u64, progress: u32) -> Goal {
    Goal {
        id,
        title: format!("goal-{id}"),
        description: String::new(),
        progress,
        target_date: None,
    }
}

fn entry(id: u64, start_time: Time) -> CalendarEntry {
    CalendarEntry {
        id,
        start_time,
        end_time: None,
        title: format!("event-{id}"),
        description: String::new(),
        recurrence: None,
        task_id: None,
    }
}

fn item(id: u64, amount_cents: i64, date: Time, item_type: BudgetItemType) -> BudgetItem {
    BudgetItem {
        id,
        amount_cents,
        description: format!("item-{id}"),
        date,
        item_type,
    }
}

fn stat<'a>(summary: &'a SectionSummary, label: &str) -> Option<&'a str> {
    summary
        .stats
        .iter()
        .find(|s| s.label == label)
        .map(|s| s.value.as_str())
}

// ═══════════════════════════════════════════════════════════════════
//  Tasks
// ═══════════════════════════════════════════════════════════════════

mod tasks {
    use super::*;

    #[test]
    fn empty_list_is_empty_summary() {
        let service = SummaryService::new();
        let summary = service.tasks_summary(&[], SummaryMode::Stats, now());
        assert!(summary.is_empty);
        assert!(summary.stats.is_empty());
    }

    #[test]
    fn stats_counts_totals() {
        let service = SummaryService::new();
        let tasks = vec![
            task(1, true, None, ts(2024, 6, 1)),
            task(2, false, None, ts(2024, 6, 2)),
            task(3, false, None, ts(2024, 6, 3)),
        ];
        let summary = service.tasks_summary(&tasks, SummaryMode::Stats, now());
        assert_eq!(stat(&summary, "Total"), Some("3"));
        assert_eq!(stat(&summary, "Completed"), Some("1"));
        assert_eq!(stat(&summary, "Pending"), Some("2"));
        // No overdue tasks → no Overdue tile
        assert_eq!(stat(&summary, "Overdue"), None);
        assert_eq!(summary.stats.len(), 3);
    }

    #[test]
    fn overdue_tile_appears_when_nonzero() {
        let service = SummaryService::new();
        let tasks = vec![
            task(1, false, Some(ts(2024, 6, 10)), ts(2024, 6, 1)), // past due
            task(2, false, Some(ts(2024, 6, 20)), ts(2024, 6, 2)), // future
            task(3, true, Some(ts(2024, 6, 10)), ts(2024, 6, 3)),  // done
        ];
        let summary = service.tasks_summary(&tasks, SummaryMode::Stats, now());
        assert_eq!(stat(&summary, "Overdue"), Some("1"));
    }

    #[test]
    fn recent_mode_names_latest_task() {
        let service = SummaryService::new();
        let tasks = vec![
            task(1, false, None, ts(2024, 6, 1)),
            task(2, false, None, ts(2024, 6, 9)),
            task(3, true, None, ts(2024, 6, 5)),
        ];
        let summary = service.tasks_summary(&tasks, SummaryMode::Recent, now());
        assert_eq!(summary.secondary.as_deref(), Some("Latest: task-2"));
        assert_eq!(summary.stats.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Goals
// ═══════════════════════════════════════════════════════════════════

mod goals {
    use super::*;

    #[test]
    fn empty_list_is_empty_summary() {
        let service = SummaryService::new();
        assert!(service.goals_summary(&[], SummaryMode::Stats).is_empty);
    }

    #[test]
    fn stats_average_progress_rounds() {
        let service = SummaryService::new();
        let goals = vec![goal(1, 50), goal(2, 75)];
        let summary = service.goals_summary(&goals, SummaryMode::Stats);
        // (50 + 75) / 2 = 62.5, rounded away from zero
        assert_eq!(stat(&summary, "Avg Progress"), Some("63%"));
        assert_eq!(stat(&summary, "Total"), Some("2"));
        assert_eq!(stat(&summary, "Completed"), Some("0"));
    }

    #[test]
    fn completed_counts_at_or_above_100() {
        let service = SummaryService::new();
        let goals = vec![goal(1, 100), goal(2, 110), goal(3, 99)];
        let summary = service.goals_summary(&goals, SummaryMode::Stats);
        assert_eq!(stat(&summary, "Completed"), Some("2"));
    }

    #[test]
    fn recent_mode_names_last_goal() {
        let service = SummaryService::new();
        let goals = vec![goal(1, 10), goal(2, 20)];
        let summary = service.goals_summary(&goals, SummaryMode::Recent);
        assert_eq!(summary.secondary.as_deref(), Some("Latest: goal-2"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Calendar
// ═══════════════════════════════════════════════════════════════════

mod calendar {
    use super::*;

    #[test]
    fn stats_count_today_and_upcoming() {
        let service = SummaryService::new();
        let entries = vec![
            entry(1, ts(2024, 6, 15) - 3_600_000_000_000), // today, earlier
            entry(2, ts(2024, 6, 20)),                     // upcoming
            entry(3, ts(2024, 6, 1)),                      // past
        ];
        let summary = service.calendar_summary(&entries, SummaryMode::Stats, now());
        assert_eq!(stat(&summary, "Total"), Some("3"));
        assert_eq!(stat(&summary, "Today"), Some("1"));
        assert_eq!(stat(&summary, "Upcoming"), Some("1"));
    }

    #[test]
    fn recent_mode_names_next_event() {
        let service = SummaryService::new();
        let entries = vec![
            entry(1, ts(2024, 7, 1)),
            entry(2, ts(2024, 6, 18)),
            entry(3, ts(2024, 5, 1)),
        ];
        let summary = service.calendar_summary(&entries, SummaryMode::Recent, now());
        assert_eq!(
            summary.secondary.as_deref(),
            Some("Next: event-2 on 2024-06-18")
        );
    }

    #[test]
    fn recent_mode_without_upcoming_events() {
        let service = SummaryService::new();
        let entries = vec![entry(1, ts(2024, 5, 1))];
        let summary = service.calendar_summary(&entries, SummaryMode::Recent, now());
        assert_eq!(summary.secondary.as_deref(), Some("No upcoming events"));
    }

    #[test]
    fn empty_list_is_empty_summary() {
        let service = SummaryService::new();
        assert!(service
            .calendar_summary(&[], SummaryMode::Stats, now())
            .is_empty);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Budget
// ═══════════════════════════════════════════════════════════════════

mod budget {
    use super::*;

    fn items() -> Vec<BudgetItem> {
        vec![
            item(1, 500_000, ts(2024, 6, 1), BudgetItemType::Income), // this month
            item(2, 120_000, ts(2024, 6, 10), BudgetItemType::Expense), // this month
            item(3, 999_900, ts(2024, 5, 20), BudgetItemType::Income), // last month
        ]
    }

    #[test]
    fn month_period_filters_to_current_month() {
        let service = SummaryService::new();
        let summary = service.budget_summary(
            &items(),
            SummaryMode::Stats,
            BudgetSummaryPeriod::Month,
            now(),
        );
        assert_eq!(stat(&summary, "Income"), Some("$5,000.00"));
        assert_eq!(stat(&summary, "Expenses"), Some("$1,200.00"));
        assert_eq!(stat(&summary, "Net"), Some("$3,800.00"));
    }

    #[test]
    fn all_period_includes_every_item() {
        let service = SummaryService::new();
        let summary = service.budget_summary(
            &items(),
            SummaryMode::Stats,
            BudgetSummaryPeriod::All,
            now(),
        );
        assert_eq!(stat(&summary, "Income"), Some("$14,999.00"));
        assert_eq!(stat(&summary, "Net"), Some("$13,799.00"));
    }

    #[test]
    fn net_can_be_negative() {
        let service = SummaryService::new();
        let only_expense = vec![item(1, 5_000, ts(2024, 6, 2), BudgetItemType::Expense)];
        let summary = service.budget_summary(
            &only_expense,
            SummaryMode::Stats,
            BudgetSummaryPeriod::Month,
            now(),
        );
        assert_eq!(stat(&summary, "Net"), Some("-$50.00"));
    }

    #[test]
    fn recent_mode_counts_period_and_names_latest() {
        let service = SummaryService::new();
        let summary = service.budget_summary(
            &items(),
            SummaryMode::Recent,
            BudgetSummaryPeriod::Month,
            now(),
        );
        assert_eq!(stat(&summary, "This Month"), Some("2"));
        assert_eq!(
            summary.secondary.as_deref(),
            Some("Latest: item-2 ($1,200.00)")
        );
    }

    #[test]
    fn empty_list_is_empty_summary() {
        let service = SummaryService::new();
        let summary = service.budget_summary(
            &[],
            SummaryMode::Stats,
            BudgetSummaryPeriod::Month,
            now(),
        );
        assert!(summary.is_empty);
    }
}
