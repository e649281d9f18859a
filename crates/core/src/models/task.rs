use serde::{Deserialize, Serialize};

use super::calendar::Time;

/// Weekday a day-of-week task is pinned to. The tracker only schedules
/// these on workdays; weekend work goes through `TaskType::Weekend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayOfWeek::Monday => write!(f, "Monday"),
            DayOfWeek::Tuesday => write!(f, "Tuesday"),
            DayOfWeek::Wednesday => write!(f, "Wednesday"),
            DayOfWeek::Thursday => write!(f, "Thursday"),
            DayOfWeek::Friday => write!(f, "Friday"),
        }
    }
}

/// How a task recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskType {
    /// Every day
    Daily,
    /// Saturdays and Sundays
    Weekend,
    /// A specific workday
    DayOfWeek(DayOfWeek),
}

/// Display section a task is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSection {
    DayOfWeek,
    Daily,
    Weekend,
}

impl TaskSection {
    /// Human-readable section heading.
    pub fn label(&self) -> &'static str {
        match self {
            TaskSection::DayOfWeek => "Day-of-Week Tasks",
            TaskSection::Daily => "Recurring Daily Tasks",
            TaskSection::Weekend => "Weekend Tasks",
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier assigned by the remote store
    pub id: u64,

    pub description: String,

    pub completed: bool,

    /// Optional deadline
    #[serde(default)]
    pub due_date: Option<Time>,

    pub task_type: TaskType,

    pub created_at: Time,
}

impl Task {
    /// Which section this task is listed under.
    pub fn section(&self) -> TaskSection {
        match self.task_type {
            TaskType::Daily => TaskSection::Daily,
            TaskType::Weekend => TaskSection::Weekend,
            TaskType::DayOfWeek(_) => TaskSection::DayOfWeek,
        }
    }

    /// The pinned weekday, for day-of-week tasks.
    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        match self.task_type {
            TaskType::DayOfWeek(day) => Some(day),
            _ => None,
        }
    }

    /// Incomplete and past its deadline at `now`.
    pub fn is_overdue(&self, now: Time) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }
}
