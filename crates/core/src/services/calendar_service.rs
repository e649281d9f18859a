use chrono::{Days, Duration, Local, Months, NaiveDate};
use std::collections::HashSet;

use crate::models::calendar::{day_key_for, CalendarEntry, DayKey, Recurrence, Time};

/// Default safety bound on recurrence expansion: total elapsed time from the
/// base occurrence never exceeds two 365-day years. The bound exists to keep
/// degenerate inputs from looping, not to define output; exceeding it
/// truncates silently.
pub const MAX_EXPANSION_SPAN_DAYS: i64 = 2 * 365;

/// Days either side of "now" covered when no explicit indicator range is
/// given (a rolling two-year window).
pub const DEFAULT_INDICATOR_RANGE_DAYS: i64 = 365;

/// Expands recurrence rules and derives day-level presence indicators.
///
/// Pure date math — no I/O, no shared state. Safe to call from any number
/// of rendering contexts.
pub struct CalendarService {
    max_span_days: i64,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            max_span_days: MAX_EXPANSION_SPAN_DAYS,
        }
    }

    /// Override the expansion safety bound (in days from the base
    /// occurrence). Mostly useful for hosts rendering unusually wide grids.
    pub fn with_max_span_days(days: i64) -> Self {
        Self {
            max_span_days: days,
        }
    }

    /// Expand a recurrence rule into day keys inside `[range_start, range_end]`
    /// (inclusive on both ends).
    ///
    /// Starts at the local day of `start_time` and repeatedly advances by the
    /// recurrence step. Monthly/yearly steps use calendar-aware arithmetic:
    /// chrono clamps to the last valid day of the target month (Jan 31 + 1
    /// month = Feb 28/29), and the next step advances from the clamped day,
    /// so day-of-month drift compounds.
    pub fn expand_occurrences(
        &self,
        start_time: Time,
        recurrence: Recurrence,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Vec<DayKey> {
        let base_day = day_key_for(start_time);
        let mut occurrences = Vec::new();
        let mut current = base_day;

        while current <= range_end {
            if current >= range_start {
                occurrences.push(current);
            }

            let next = match recurrence {
                Recurrence::Daily => current.checked_add_days(Days::new(1)),
                Recurrence::Weekly => current.checked_add_days(Days::new(7)),
                Recurrence::Monthly => current.checked_add_months(Months::new(1)),
                Recurrence::Yearly => current.checked_add_months(Months::new(12)),
            };

            // A step that fails to advance would spin forever
            let Some(next) = next else { break };
            if next <= current {
                break;
            }
            current = next;

            if (current - base_day).num_days() > self.max_span_days {
                break;
            }
        }

        occurrences
    }

    /// The set of distinct local days with at least one scheduled occurrence.
    ///
    /// Every entry's own start day is included unconditionally — even when
    /// it falls outside the window. Recurring entries additionally
    /// contribute their range-filtered expansion. When a bound is omitted it
    /// defaults to `DEFAULT_INDICATOR_RANGE_DAYS` before/after today.
    pub fn scheduled_days(
        &self,
        entries: &[CalendarEntry],
        range_start: Option<NaiveDate>,
        range_end: Option<NaiveDate>,
    ) -> HashSet<DayKey> {
        let today = Local::now().date_naive();
        let start = range_start
            .unwrap_or_else(|| today - Duration::days(DEFAULT_INDICATOR_RANGE_DAYS));
        let end = range_end
            .unwrap_or_else(|| today + Duration::days(DEFAULT_INDICATOR_RANGE_DAYS));

        let mut days = HashSet::new();
        for entry in entries {
            days.insert(entry.start_day());

            if let Some(recurrence) = entry.recurrence {
                days.extend(self.expand_occurrences(entry.start_time, recurrence, start, end));
            }
        }
        days
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
