use super::enums::Category;
use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique ID, assigned at creation and never changed
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Category tag
    pub category: Category,
    /// Free-form description
    pub description: String,
    /// Calendar date the task belongs to
    pub date: NaiveDate,
    /// Completion flag
    pub completed: bool,
    /// Seconds accumulated by the stopwatch; None until the first accrual
    pub time_spent: Option<u64>,
    /// When the task was last edited
    pub updated_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(title: String, category: Category, date: NaiveDate, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            category,
            description,
            date,
            completed: false,
            time_spent: None,
            updated_at: None,
        }
    }

    /// Add stopwatch seconds to the accumulated total
    pub fn add_time(&mut self, seconds: u64) {
        self.time_spent = Some(self.time_spent.unwrap_or(0) + seconds);
    }

    /// Format accumulated time as "Xm Ys"
    pub fn time_spent_formatted(&self) -> Option<String> {
        self.time_spent.map(format_seconds)
    }
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

/// Partial update applied to an existing task; None fields are untouched
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Format a second count as "Xm Ys" (omits the minute part when zero)
pub fn format_seconds(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new(
            "Water the plants".to_string(),
            Category::Home,
            sample_date(),
            String::new(),
        );
        assert!(!task.completed);
        assert!(task.time_spent.is_none());
        assert!(task.updated_at.is_none());
        assert_eq!(task.category, Category::Home);
    }

    #[test]
    fn test_add_time_starts_from_zero() {
        let mut task = Task::new(
            "Read".to_string(),
            Category::Personal,
            sample_date(),
            String::new(),
        );
        task.add_time(19);
        assert_eq!(task.time_spent, Some(19));
        task.add_time(41);
        assert_eq!(task.time_spent, Some(60));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0s");
        assert_eq!(format_seconds(19), "19s");
        assert_eq!(format_seconds(60), "1m 0s");
        assert_eq!(format_seconds(125), "2m 5s");
    }

    #[test]
    fn test_time_spent_formatted() {
        let mut task = Task::new(
            "Email client".to_string(),
            Category::Work,
            sample_date(),
            String::new(),
        );
        assert_eq!(task.time_spent_formatted(), None);
        task.add_time(19);
        assert_eq!(task.time_spent_formatted(), Some("19s".to_string()));
    }
}
