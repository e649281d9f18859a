use chrono::{Datelike, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Absolute instant: nanoseconds since the Unix epoch, as delivered by the
/// remote tracker API.
pub type Time = i64;

/// Calendar-day identifier, local time zone. Its `Display` form is the
/// `YYYY-MM-DD` day key used to index day-level presence indicators.
pub type DayKey = NaiveDate;

/// Recurrence rule of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Every day
    Daily,
    /// Every 7 days
    Weekly,
    /// Every calendar month (day-of-month clamped to the target month)
    Monthly,
    /// Every calendar year
    Yearly,
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "Daily"),
            Recurrence::Weekly => write!(f, "Weekly"),
            Recurrence::Monthly => write!(f, "Monthly"),
            Recurrence::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A single calendar entry.
///
/// Entries are created/updated/deleted through the remote API; the core
/// only derives read-only projections (scheduled days, summaries) from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// Unique identifier assigned by the remote store
    pub id: u64,

    /// Start instant (always present)
    pub start_time: Time,

    /// Optional end instant; the core treats `end_time < start_time` as
    /// pass-through data, not an error
    #[serde(default)]
    pub end_time: Option<Time>,

    pub title: String,

    pub description: String,

    /// Recurrence rule; absent means a one-off entry
    #[serde(default)]
    pub recurrence: Option<Recurrence>,

    /// Back-reference to a task when the entry was created from one
    #[serde(default)]
    pub task_id: Option<u64>,
}

impl CalendarEntry {
    /// Local day key of the entry's start instant.
    pub fn start_day(&self) -> DayKey {
        day_key_for(self.start_time)
    }
}

/// Convert a nanosecond timestamp to its local calendar day.
pub fn day_key_for(timestamp: Time) -> DayKey {
    Local.timestamp_nanos(timestamp).date_naive()
}

/// The current instant as a nanosecond timestamp.
/// chrono's nanosecond range covers 1677–2262, far beyond app usage.
pub fn now_time() -> Time {
    Local::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}

// ── Grid buckets ────────────────────────────────────────────────────
// Day-key sequences consumed by the month/week/year calendar grids.

/// All day keys of a month (1-based month). Empty for an invalid month.
pub fn month_day_keys(year: i32, month: u32) -> Vec<DayKey> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let mut days = Vec::new();
    let mut date = first;
    while date.month() == month {
        days.push(date);
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }
    days
}

/// The 7 day keys of the week starting at `start`.
pub fn week_day_keys(start: NaiveDate) -> Vec<DayKey> {
    (0..7)
        .filter_map(|i| start.checked_add_days(Days::new(i)))
        .collect()
}

/// The start of the week (Sunday) containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Month numbers (1-based) with English names, for the year grid header.
pub fn year_months() -> [(u32, &'static str); 12] {
    [
        (1, "January"),
        (2, "February"),
        (3, "March"),
        (4, "April"),
        (5, "May"),
        (6, "June"),
        (7, "July"),
        (8, "August"),
        (9, "September"),
        (10, "October"),
        (11, "November"),
        (12, "December"),
    ]
}
