use crate::domain::{
    flatten_home, group_by_category, Category, HomeRow, Screen, Stopwatch, TaskDraft, TaskPatch,
    TaskStore, UiMode,
};
use crate::i18n::{tr, Text};
use crate::persistence::{
    clear_session, save_session, save_settings, AuthError, JsonUserDirectory, Session, Settings,
    UserDirectory, UserRecord,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;
use uuid::Uuid;

/// Add/edit task form state
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub title: String,
    pub description: String,
    pub date_input: String,
    pub category_index: usize,
    pub editing_field: usize, // 0 = title, 1 = description, 2 = date
    pub editing: Option<Uuid>,
    pub error: Option<&'static str>,
}

impl TaskFormState {
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date_input: date.format("%Y-%m-%d").to_string(),
            category_index: 0,
            editing_field: 0,
            editing: None,
            error: None,
        }
    }

    pub fn category(&self) -> Category {
        Category::all()[self.category_index % Category::all().len()]
    }

    pub fn cycle_category(&mut self) {
        self.category_index = (self.category_index + 1) % Category::all().len();
    }
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub editing_field: usize, // 0 = username, 1 = password
    pub message: Option<String>,
}

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct RegisterFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub editing_field: usize, // 0 = username, 1 = email, 2 = password
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub screen: Screen,
    pub ui_mode: UiMode,

    // Home screen
    pub home_selected: usize,
    pub task_form: Option<TaskFormState>,

    // Calendar screen
    pub calendar_focus: NaiveDate,
    pub calendar_selected: Option<NaiveDate>,

    // Timer screen
    pub stopwatch: Stopwatch,
    pub timer_selected: usize,

    // Login
    pub login_form: LoginFormState,
    pub register_form: RegisterFormState,
    pub current_user: Option<String>,

    // Settings
    pub settings: Settings,
    pub settings_field: usize, // 0 = username, 1 = locale, 2 = theme
    pub settings_editing_username: bool,
    pub settings_message: Option<&'static str>,
    pub settings_dirty: bool,

    // Persistence collaborators
    pub users: JsonUserDirectory,
    settings_path: PathBuf,
    session_path: PathBuf,
}

impl AppState {
    pub fn new(
        store: TaskStore,
        settings: Settings,
        users: JsonUserDirectory,
        session: Option<Session>,
        settings_path: PathBuf,
        session_path: PathBuf,
    ) -> Self {
        let current_user = session.map(|s| s.username);
        let screen = if current_user.is_some() {
            Screen::Home
        } else {
            Screen::Login
        };

        Self {
            store,
            screen,
            ui_mode: UiMode::Normal,
            home_selected: 0,
            task_form: None,
            calendar_focus: Local::now().date_naive(),
            calendar_selected: None,
            stopwatch: Stopwatch::new(),
            timer_selected: 0,
            login_form: LoginFormState::default(),
            register_form: RegisterFormState::default(),
            current_user,
            settings,
            settings_field: 0,
            settings_editing_username: false,
            settings_message: None,
            settings_dirty: false,
            users,
            settings_path,
            session_path,
        }
    }

    /// Drive periodic updates; forwarded from the event loop tick
    pub fn tick(&mut self) {
        self.stopwatch.tick();
    }

    // --- Screen navigation ---

    /// Switch screens, tearing down the timer view's run if needed
    pub fn switch_to(&mut self, screen: Screen) {
        if self.current_user.is_none() {
            return;
        }
        if self.screen == Screen::Timer && screen != Screen::Timer {
            self.stopwatch.abandon();
        }
        if screen == Screen::Timer {
            // Tasks may have been completed or deleted since the last visit
            let count = self.store.incomplete().len();
            if count > 0 && self.timer_selected >= count {
                self.timer_selected = count - 1;
            }
        }
        self.screen = screen;
        self.ui_mode = UiMode::Normal;
        self.settings_message = None;
    }

    // --- Home screen ---

    /// Selectable rows of the grouped Home list
    pub fn home_rows(&self) -> Vec<HomeRow> {
        flatten_home(&group_by_category(self.store.tasks()))
    }

    /// Id of the task under the Home cursor
    pub fn home_selected_task(&self) -> Option<Uuid> {
        match self.home_rows().get(self.home_selected) {
            Some(HomeRow::Task(id)) => Some(*id),
            _ => None,
        }
    }

    /// Move the Home cursor up, skipping category headers
    pub fn home_move_up(&mut self) {
        let rows = self.home_rows();
        let mut idx = self.home_selected;
        while idx > 0 {
            idx -= 1;
            if matches!(rows.get(idx), Some(HomeRow::Task(_))) {
                self.home_selected = idx;
                return;
            }
        }
    }

    /// Move the Home cursor down, skipping category headers
    pub fn home_move_down(&mut self) {
        let rows = self.home_rows();
        let mut idx = self.home_selected;
        while idx + 1 < rows.len() {
            idx += 1;
            if matches!(rows.get(idx), Some(HomeRow::Task(_))) {
                self.home_selected = idx;
                return;
            }
        }
    }

    /// Put the cursor on the first task row, if any
    pub fn home_snap_selection(&mut self) {
        let rows = self.home_rows();
        if !matches!(rows.get(self.home_selected), Some(HomeRow::Task(_))) {
            self.home_selected = rows
                .iter()
                .position(|r| matches!(r, HomeRow::Task(_)))
                .unwrap_or(0);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.home_selected_task() {
            self.store.toggle_complete(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.home_selected_task() {
            self.store.delete(id);
            self.home_snap_selection();
        }
    }

    /// Open the task form for a new task
    pub fn open_add_form(&mut self) {
        self.task_form = Some(TaskFormState::blank(Local::now().date_naive()));
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the task form pre-filled with the selected task
    pub fn open_edit_form(&mut self) {
        let Some(id) = self.home_selected_task() else {
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };

        let category_index = Category::all()
            .iter()
            .position(|c| *c == task.category)
            .unwrap_or(0);

        self.task_form = Some(TaskFormState {
            title: task.title.clone(),
            description: task.description.clone(),
            date_input: task.date.format("%Y-%m-%d").to_string(),
            category_index,
            editing_field: 0,
            editing: Some(id),
            error: None,
        });
        self.ui_mode = UiMode::EditingTask;
    }

    /// Submit the task form. The form stays open (with an error note) on
    /// a blank title or an unparseable date.
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.task_form.clone() else {
            return;
        };

        if form.title.trim().is_empty() {
            if let Some(f) = self.task_form.as_mut() {
                f.error = Some("Title must not be empty");
            }
            return;
        }

        let Ok(date) = NaiveDate::parse_from_str(&form.date_input, "%Y-%m-%d") else {
            if let Some(f) = self.task_form.as_mut() {
                f.error = Some("Date must be YYYY-MM-DD");
            }
            return;
        };

        let category = form.category();
        match form.editing {
            Some(id) => self.store.edit(
                id,
                TaskPatch {
                    title: Some(form.title),
                    category: Some(category),
                    description: Some(form.description),
                    date: Some(date),
                },
            ),
            None => self.store.add(TaskDraft {
                title: form.title,
                category,
                date,
                description: form.description,
            }),
        }

        self.close_task_form();
    }

    pub fn close_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
        self.home_snap_selection();
    }

    // --- Calendar screen ---

    pub fn calendar_move_days(&mut self, days: i64) {
        self.calendar_focus = self.calendar_focus + chrono::Duration::days(days);
    }

    pub fn calendar_move_month(&mut self, forward: bool) {
        let (year, month) = (self.calendar_focus.year(), self.calendar_focus.month());
        let (year, month) = if forward {
            if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            }
        } else if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };

        let day = self.calendar_focus.day().min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.calendar_focus = date;
        }
    }

    pub fn calendar_select_focused(&mut self) {
        self.calendar_selected = Some(self.calendar_focus);
    }

    // --- Timer screen ---

    /// Move the timer picker cursor; locked while a run is in progress
    pub fn timer_move(&mut self, down: bool) {
        if self.stopwatch.is_running() {
            return;
        }
        let count = self.store.incomplete().len();
        if count == 0 {
            return;
        }
        if down {
            if self.timer_selected + 1 < count {
                self.timer_selected += 1;
            }
        } else {
            self.timer_selected = self.timer_selected.saturating_sub(1);
        }
    }

    /// Id of the task under the timer picker cursor
    pub fn timer_picked_task(&self) -> Option<Uuid> {
        self.store
            .incomplete()
            .get(self.timer_selected)
            .map(|t| t.id)
    }

    /// Start a run against the picked task. No-op when nothing is picked
    /// or the pick is no longer in the collection.
    pub fn timer_start(&mut self) {
        let Some(id) = self.timer_picked_task() else {
            return;
        };
        if !self.store.contains(id) {
            return;
        }
        self.stopwatch.select(Some(id));
        self.stopwatch.start();
    }

    /// Stop the run and accrue the elapsed seconds onto the task
    pub fn timer_stop(&mut self) {
        if let Some(accrual) = self.stopwatch.stop() {
            self.store.accrue(accrual.task_id, accrual.seconds);
        }
    }

    pub fn timer_toggle(&mut self) {
        if self.stopwatch.is_running() {
            self.timer_stop();
        } else {
            self.timer_start();
        }
    }

    pub fn timer_reset(&mut self) {
        self.stopwatch.reset();
    }

    // --- Login / registration ---

    /// Attempt a login with the form credentials
    pub fn login(&mut self) {
        let username = self.login_form.username.clone();
        let password = self.login_form.password.clone();

        match self.users.find_user_by_credential(&username, &password) {
            Some(user) => {
                self.current_user = Some(user.username.clone());
                self.login_form = LoginFormState::default();
                if let Err(e) = save_session(
                    &self.session_path,
                    &Session {
                        username: user.username,
                    },
                ) {
                    eprintln!("Warning: failed to save session: {}", e);
                }
                self.screen = Screen::Home;
                self.home_snap_selection();
            }
            None => {
                self.login_form.message =
                    Some(tr(self.settings.locale, Text::InvalidCredentials).to_string());
                self.login_form.password.clear();
            }
        }
    }

    pub fn open_register_form(&mut self) {
        self.register_form = RegisterFormState::default();
        self.ui_mode = UiMode::Registering;
    }

    /// Submit the registration form; on success drop back to the login
    /// form with the new username pre-filled
    pub fn register(&mut self) {
        let form = self.register_form.clone();
        if form.username.trim().is_empty()
            || form.email.trim().is_empty()
            || form.password.is_empty()
        {
            return;
        }

        let result = self.users.register_user(UserRecord {
            username: form.username.clone(),
            email: form.email,
            password: form.password,
        });

        match result {
            Ok(()) => {
                self.login_form.message =
                    Some(tr(self.settings.locale, Text::RegistrationSuccessful).to_string());
                self.login_form.username = form.username;
                self.login_form.password.clear();
                self.ui_mode = UiMode::Normal;
            }
            Err(AuthError::EmailTaken) => {
                self.login_form.message =
                    Some(tr(self.settings.locale, Text::EmailAlreadyRegistered).to_string());
                self.ui_mode = UiMode::Normal;
            }
            Err(AuthError::Io(e)) => {
                eprintln!("Warning: failed to save user: {}", e);
                self.ui_mode = UiMode::Normal;
            }
        }
    }

    /// Log out, clear the session, and return to the login screen
    pub fn logout(&mut self) {
        self.stopwatch.abandon();
        self.current_user = None;
        if let Err(e) = clear_session(&self.session_path) {
            eprintln!("Warning: failed to clear session: {}", e);
        }
        self.screen = Screen::Login;
        self.ui_mode = UiMode::Normal;
        self.login_form = LoginFormState::default();
    }

    // --- Settings ---

    pub fn settings_cycle_locale(&mut self) {
        let all = crate::domain::Locale::all();
        let idx = all
            .iter()
            .position(|l| *l == self.settings.locale)
            .unwrap_or(0);
        self.settings.locale = all[(idx + 1) % all.len()];
        self.settings_dirty = true;
    }

    pub fn settings_cycle_theme(&mut self) {
        let all = crate::domain::Theme::all();
        let idx = all
            .iter()
            .position(|t| *t == self.settings.theme)
            .unwrap_or(0);
        self.settings.theme = all[(idx + 1) % all.len()];
        self.settings_dirty = true;
    }

    /// Persist settings to disk
    pub fn save_settings(&mut self) -> Result<()> {
        save_settings(&self.settings_path, &self.settings)?;
        self.settings_dirty = false;
        self.settings_message = Some(tr(self.settings.locale, Text::SettingsSaved));
        Ok(())
    }
}

/// Days in a calendar month, accounting for leap years
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopwatchPhase;
    use tempfile::tempdir;

    fn test_app(store: TaskStore) -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let users = JsonUserDirectory::open(dir.path().join("users.json")).unwrap();
        let app = AppState::new(
            store,
            Settings::default(),
            users,
            Some(Session {
                username: "maya".to_string(),
            }),
            dir.path().join("settings.json"),
            dir.path().join("session.json"),
        );
        (app, dir)
    }

    #[test]
    fn test_starts_on_login_without_session() {
        let dir = tempdir().unwrap();
        let users = JsonUserDirectory::open(dir.path().join("users.json")).unwrap();
        let app = AppState::new(
            TaskStore::new(),
            Settings::default(),
            users,
            None,
            dir.path().join("settings.json"),
            dir.path().join("session.json"),
        );
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_home_selection_skips_headers() {
        let (mut app, _dir) = test_app(TaskStore::sample());
        app.home_snap_selection();

        let rows = app.home_rows();
        assert!(matches!(rows[app.home_selected], HomeRow::Task(_)));

        app.home_move_down();
        assert!(matches!(rows[app.home_selected], HomeRow::Task(_)));
    }

    #[test]
    fn test_leaving_timer_screen_abandons_run() {
        let (mut app, _dir) = test_app(TaskStore::sample());
        app.switch_to(Screen::Timer);
        app.timer_start();
        assert!(app.stopwatch.is_running());

        app.switch_to(Screen::Home);
        assert_eq!(app.stopwatch.phase(), StopwatchPhase::Idle);
        // Nothing accrued
        assert!(app.store.incomplete().iter().all(|t| t.time_spent.is_none()));
    }

    #[test]
    fn test_timer_stop_accrues_into_store() {
        let (mut app, _dir) = test_app(TaskStore::sample());
        app.switch_to(Screen::Timer);

        let id = app.timer_picked_task().unwrap();
        app.stopwatch.select(Some(id));
        let t0 = std::time::Instant::now();
        app.stopwatch.start_at(t0);
        let accrual = app
            .stopwatch
            .stop_at(t0 + std::time::Duration::from_secs(5))
            .unwrap();
        app.store.accrue(accrual.task_id, accrual.seconds);

        assert_eq!(app.store.get(id).unwrap().time_spent, Some(5));
    }

    #[test]
    fn test_timer_start_without_open_tasks_is_noop() {
        let (mut app, _dir) = test_app(TaskStore::new());
        app.switch_to(Screen::Timer);
        app.timer_start();
        assert!(!app.stopwatch.is_running());
    }

    #[test]
    fn test_submit_blank_title_keeps_form_open() {
        let (mut app, _dir) = test_app(TaskStore::new());
        app.open_add_form();
        app.submit_task_form();

        assert!(app.task_form.is_some());
        assert!(app.task_form.as_ref().unwrap().error.is_some());
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn test_submit_add_form_appends_task() {
        let (mut app, _dir) = test_app(TaskStore::new());
        app.open_add_form();
        {
            let form = app.task_form.as_mut().unwrap();
            form.title = "Plan trip".to_string();
            form.category_index = 1; // Work
        }
        app.submit_task_form();

        assert!(app.task_form.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].category, Category::Work);
    }

    #[test]
    fn test_register_then_login() {
        let dir = tempdir().unwrap();
        let users = JsonUserDirectory::open(dir.path().join("users.json")).unwrap();
        let mut app = AppState::new(
            TaskStore::new(),
            Settings::default(),
            users,
            None,
            dir.path().join("settings.json"),
            dir.path().join("session.json"),
        );

        app.open_register_form();
        app.register_form.username = "maya".to_string();
        app.register_form.email = "maya@example.com".to_string();
        app.register_form.password = "hunter2".to_string();
        app.register();
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.login_form.username = "maya".to_string();
        app.login_form.password = "hunter2".to_string();
        app.login();

        assert_eq!(app.current_user.as_deref(), Some("maya"));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_login_failure_sets_message() {
        let dir = tempdir().unwrap();
        let users = JsonUserDirectory::open(dir.path().join("users.json")).unwrap();
        let mut app = AppState::new(
            TaskStore::new(),
            Settings::default(),
            users,
            None,
            dir.path().join("settings.json"),
            dir.path().join("session.json"),
        );

        app.login_form.username = "ghost".to_string();
        app.login_form.password = "nope".to_string();
        app.login();

        assert!(app.current_user.is_none());
        assert!(app.login_form.message.is_some());
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (mut app, _dir) = test_app(TaskStore::sample());
        app.logout();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.current_user.is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_calendar_month_navigation_clamps_day() {
        let (mut app, _dir) = test_app(TaskStore::new());
        app.calendar_focus = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        app.calendar_move_month(true);
        assert_eq!(app.calendar_focus, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        app.calendar_move_month(false);
        assert_eq!(app.calendar_focus, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
    }

    #[test]
    fn test_settings_cycles_mark_dirty() {
        let (mut app, _dir) = test_app(TaskStore::new());
        assert!(!app.settings_dirty);
        app.settings_cycle_locale();
        assert!(app.settings_dirty);
        assert_eq!(app.settings.locale, crate::domain::Locale::Es);

        app.settings_cycle_theme();
        assert_eq!(app.settings.theme, crate::domain::Theme::Dark);
    }
}
