use super::enums::Category;
use super::task::{Task, TaskDraft, TaskPatch};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Owns the ordered task collection for the session.
///
/// All mutations are keyed by id and fail silently: an unknown id, or a
/// draft with a blank title, leaves the collection unchanged. Tasks are
/// never persisted; the store lives and dies with the process.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Demo tasks shown on first launch
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let mut completed_task = Task::new(
            "Email client".to_string(),
            Category::Work,
            date(2024, 8, 7),
            "Send the project proposal to the client.".to_string(),
        );
        completed_task.completed = true;
        completed_task.time_spent = Some(19);

        Self::with_tasks(vec![
            Task::new(
                "Complete report".to_string(),
                Category::Work,
                date(2024, 8, 5),
                "Finish the quarterly financial report.".to_string(),
            ),
            Task::new(
                "Buy groceries".to_string(),
                Category::Personal,
                date(2024, 8, 6),
                "Buy milk, bread, and eggs from the supermarket.".to_string(),
            ),
            completed_task,
            Task::new(
                "Clean kitchen".to_string(),
                Category::Home,
                date(2024, 8, 8),
                "Clean the countertops, sink, and mop the floor.".to_string(),
            ),
            Task::new(
                "Exercise".to_string(),
                Category::Personal,
                date(2024, 8, 9),
                "Go for a 30-minute run in the park.".to_string(),
            ),
        ])
    }

    /// Append a task with a fresh id. Drafts with a blank or
    /// whitespace-only title are silently rejected.
    pub fn add(&mut self, draft: TaskDraft) {
        if draft.title.trim().is_empty() {
            return;
        }
        self.tasks.push(Task::new(
            draft.title,
            draft.category,
            draft.date,
            draft.description,
        ));
    }

    /// Merge the Some fields of a patch into the matching task and stamp
    /// its edit time. A blank patched title is ignored so titles stay
    /// non-empty; the id is never touched.
    pub fn edit(&mut self, id: Uuid, patch: TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        if let Some(title) = patch.title {
            if !title.trim().is_empty() {
                task.title = title;
            }
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(date) = patch.date {
            task.date = date;
        }
        task.updated_at = Some(Local::now());
    }

    /// Remove the matching task
    pub fn delete(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Flip the completion flag of the matching task
    pub fn toggle_complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Add stopwatch seconds to the matching task's accumulated time
    pub fn accrue(&mut self, id: Uuid, seconds: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.add_time(seconds);
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Tasks still open, in collection order (the stopwatch picker set)
    pub fn incomplete(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn draft(title: &str, category: Category) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            category,
            date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_grows_collection_with_unique_ids() {
        let mut store = TaskStore::new();
        store.add(draft("Write letter", Category::Personal));
        store.add(draft("Fix shelf", Category::Home));
        store.add(draft("Review PR", Category::Work));

        assert_eq!(store.len(), 3);
        let ids: HashSet<Uuid> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_blank_title_is_rejected() {
        let mut store = TaskStore::new();
        store.add(draft("Water plants", Category::Home));
        store.add(draft("Feed cat", Category::Home));

        store.add(draft("", Category::Home));
        store.add(draft("   ", Category::Other));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_changes_only_patched_fields() {
        let mut store = TaskStore::new();
        store.add(draft("Old title", Category::Work));
        let before = store.tasks()[0].clone();

        store.edit(
            before.id,
            TaskPatch {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        );

        let after = &store.tasks()[0];
        assert_eq!(after.title, "New title");
        assert_eq!(after.id, before.id);
        assert_eq!(after.category, before.category);
        assert_eq!(after.description, before.description);
        assert_eq!(after.date, before.date);
        assert_eq!(after.completed, before.completed);
        assert_eq!(after.time_spent, before.time_spent);
        assert!(after.updated_at.is_some());
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("Keep me", Category::Personal));
        let before = store.tasks().to_vec();

        store.edit(
            Uuid::new_v4(),
            TaskPatch {
                title: Some("Hijack".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_edit_blank_title_field_is_ignored() {
        let mut store = TaskStore::new();
        store.add(draft("Original", Category::Personal));
        let id = store.tasks()[0].id;

        store.edit(
            id,
            TaskPatch {
                title: Some("  ".to_string()),
                category: Some(Category::Other),
                ..Default::default()
            },
        );

        let task = &store.tasks()[0];
        assert_eq!(task.title, "Original");
        assert_eq!(task.category, Category::Other);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));
        store.add(draft("B", Category::Work));
        let id = store.tasks()[0].id;

        store.delete(id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "B");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));
        let before = store.tasks().to_vec();

        store.delete(Uuid::new_v4());
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_toggle_complete_is_its_own_inverse() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));
        let id = store.tasks()[0].id;

        assert!(!store.tasks()[0].completed);
        store.toggle_complete(id);
        assert!(store.tasks()[0].completed);
        store.toggle_complete(id);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_complete_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));

        store.toggle_complete(Uuid::new_v4());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_accrue_adds_and_treats_none_as_zero() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));
        let id = store.tasks()[0].id;

        store.accrue(id, 90);
        assert_eq!(store.tasks()[0].time_spent, Some(90));
        store.accrue(id, 30);
        assert_eq!(store.tasks()[0].time_spent, Some(120));
    }

    #[test]
    fn test_accrue_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));

        store.accrue(Uuid::new_v4(), 60);
        assert_eq!(store.tasks()[0].time_spent, None);
    }

    #[test]
    fn test_incomplete_filters_completed() {
        let mut store = TaskStore::new();
        store.add(draft("A", Category::Work));
        store.add(draft("B", Category::Home));
        let id = store.tasks()[0].id;
        store.toggle_complete(id);

        let open = store.incomplete();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "B");
    }

    #[test]
    fn test_sample_seeds_five_tasks() {
        let store = TaskStore::sample();
        assert_eq!(store.len(), 5);
        assert_eq!(store.incomplete().len(), 4);
        let done: Vec<_> = store.tasks().iter().filter(|t| t.completed).collect();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].time_spent, Some(19));
    }
}
