pub mod enums;
pub mod store;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{Category, Locale, Screen, Theme, UiMode};
pub use store::TaskStore;
pub use task::{format_seconds, Task, TaskDraft, TaskPatch};
pub use timer::{Accrual, Stopwatch, StopwatchPhase};
pub use views::{
    completion_stats, flatten_home, group_by_category, marked_dates, tasks_on, CategoryGroup,
    CompletionStats, HomeRow,
};
