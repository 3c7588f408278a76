use super::enums::Category;
use super::task::Task;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Tasks sharing one category, in collection order
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    pub tasks: Vec<Task>,
}

/// Partition tasks by category, keeping first-seen category order and
/// the original order within each group. Every task lands in exactly
/// one group.
pub fn group_by_category(tasks: &[Task]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for task in tasks {
        match groups.iter().position(|g| g.category == task.category) {
            Some(idx) => groups[idx].tasks.push(task.clone()),
            None => groups.push(CategoryGroup {
                category: task.category,
                tasks: vec![task.clone()],
            }),
        }
    }

    groups
}

/// Completion-rate summary for the Home screen cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionStats {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
    /// Percent of tasks still open, two decimal places
    pub todo_rate: f64,
    /// Percent of tasks done, two decimal places
    pub done_rate: f64,
}

/// Compute completion rates. Both rates are 0.00 on an empty
/// collection.
pub fn completion_stats(tasks: &[Task]) -> CompletionStats {
    let total = tasks.len();
    let remaining = tasks.iter().filter(|t| !t.completed).count();
    let completed = total - remaining;

    let (todo_rate, done_rate) = if total > 0 {
        let todo = round2(remaining as f64 / total as f64 * 100.0);
        (todo, round2(100.0 - todo))
    } else {
        (0.0, 0.0)
    };

    CompletionStats {
        total,
        remaining,
        completed,
        todo_rate,
        done_rate,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tasks whose date matches the queried calendar day, in collection
/// order
pub fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.date == date).collect()
}

/// Distinct dates present in the collection, for calendar markers
pub fn marked_dates(tasks: &[Task]) -> BTreeSet<NaiveDate> {
    tasks.iter().map(|t| t.date).collect()
}

/// A selectable row in the flattened Home list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeRow {
    /// Category header, not selectable
    Header(Category),
    /// Task row carrying the task id
    Task(Uuid),
}

/// Flatten the grouped view into a linear list of rows for rendering
/// and selection
pub fn flatten_home(groups: &[CategoryGroup]) -> Vec<HomeRow> {
    let mut rows = Vec::new();
    for group in groups {
        rows.push(HomeRow::Header(group.category));
        for task in &group.tasks {
            rows.push(HomeRow::Task(task.id));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn task(title: &str, category: Category, day: u32) -> Task {
        Task::new(
            title.to_string(),
            category,
            NaiveDate::from_ymd_opt(2024, 8, day).unwrap(),
            String::new(),
        )
    }

    #[test]
    fn test_group_by_category_is_a_partition() {
        let tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Personal, 6),
            task("C", Category::Work, 7),
            task("D", Category::Home, 8),
        ];

        let groups = group_by_category(&tasks);

        let grouped_ids: Vec<Uuid> = groups
            .iter()
            .flat_map(|g| g.tasks.iter().map(|t| t.id))
            .collect();
        let original_ids: HashSet<Uuid> = tasks.iter().map(|t| t.id).collect();

        assert_eq!(grouped_ids.len(), tasks.len());
        assert_eq!(
            grouped_ids.iter().copied().collect::<HashSet<_>>(),
            original_ids
        );
    }

    #[test]
    fn test_group_by_category_preserves_first_seen_order() {
        let tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Personal, 6),
            task("C", Category::Work, 7),
        ];

        let groups = group_by_category(&tasks);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, Category::Work);
        assert_eq!(groups[1].category, Category::Personal);
        assert_eq!(groups[0].tasks[0].title, "A");
        assert_eq!(groups[0].tasks[1].title, "C");
    }

    #[test]
    fn test_completion_stats_empty_collection() {
        let stats = completion_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.todo_rate, 0.0);
        assert_eq!(stats.done_rate, 0.0);
    }

    #[test]
    fn test_completion_stats_all_completed() {
        let mut tasks = vec![task("A", Category::Work, 5), task("B", Category::Home, 6)];
        for t in &mut tasks {
            t.completed = true;
        }

        let stats = completion_stats(&tasks);
        assert_eq!(stats.todo_rate, 0.0);
        assert_eq!(stats.done_rate, 100.0);
        assert_eq!(stats.remaining, 0);
    }

    #[test]
    fn test_completion_stats_rounds_to_two_decimals() {
        let mut tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Work, 6),
            task("C", Category::Work, 7),
        ];
        tasks[0].completed = true;

        let stats = completion_stats(&tasks);
        assert_eq!(stats.remaining, 2);
        assert_eq!(stats.todo_rate, 66.67);
        assert_eq!(stats.done_rate, 33.33);
    }

    #[test]
    fn test_tasks_on_matches_exact_date() {
        let tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Home, 6),
            task("C", Category::Work, 5),
        ];

        let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
        let on_day = tasks_on(&tasks, date);
        assert_eq!(on_day.len(), 2);
        assert!(on_day.iter().all(|t| t.date == date));

        let empty_day = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        assert!(tasks_on(&tasks, empty_day).is_empty());
    }

    #[test]
    fn test_marked_dates_deduplicates() {
        let tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Home, 6),
            task("C", Category::Work, 5),
        ];

        let marked = marked_dates(&tasks);
        assert_eq!(marked.len(), 2);
        assert!(marked.contains(&NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()));
        assert!(marked.contains(&NaiveDate::from_ymd_opt(2024, 8, 6).unwrap()));
    }

    #[test]
    fn test_flatten_home_interleaves_headers_and_tasks() {
        let tasks = vec![
            task("A", Category::Work, 5),
            task("B", Category::Personal, 6),
            task("C", Category::Work, 7),
        ];

        let rows = flatten_home(&group_by_category(&tasks));

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], HomeRow::Header(Category::Work));
        assert_eq!(rows[1], HomeRow::Task(tasks[0].id));
        assert_eq!(rows[2], HomeRow::Task(tasks[2].id));
        assert_eq!(rows[3], HomeRow::Header(Category::Personal));
        assert_eq!(rows[4], HomeRow::Task(tasks[1].id));
    }
}
