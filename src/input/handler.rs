use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingTask => handle_task_form(app, key),
        UiMode::Registering => handle_register_form(app, key),
        UiMode::Normal => match app.screen {
            Screen::Login => handle_login(app, key),
            Screen::Home => handle_home(app, key),
            Screen::Calendar => handle_calendar(app, key),
            Screen::Timer => handle_timer(app, key),
            Screen::Settings => handle_settings(app, key),
        },
    }
}

/// Tab-bar navigation shared by the main screens
fn handle_navigation(app: &mut AppState, key: KeyEvent) -> bool {
    let target = match key.code {
        KeyCode::Char('1') => Some(Screen::Home),
        KeyCode::Char('2') => Some(Screen::Calendar),
        KeyCode::Char('3') => Some(Screen::Timer),
        KeyCode::Char('4') => Some(Screen::Settings),
        KeyCode::Tab => {
            let tabs = Screen::tabs();
            let idx = tabs.iter().position(|s| *s == app.screen).unwrap_or(0);
            Some(tabs[(idx + 1) % tabs.len()])
        }
        _ => None,
    };

    if let Some(screen) = target {
        app.switch_to(screen);
        if screen == Screen::Home {
            app.home_snap_selection();
        }
        true
    } else {
        false
    }
}

fn handle_home(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_navigation(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Up => app.home_move_up(),
        KeyCode::Down => app.home_move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit_form(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_calendar(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_navigation(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Left => app.calendar_move_days(-1),
        KeyCode::Right => app.calendar_move_days(1),
        KeyCode::Up => app.calendar_move_days(-7),
        KeyCode::Down => app.calendar_move_days(7),
        KeyCode::Char('n') | KeyCode::Char('N') => app.calendar_move_month(true),
        KeyCode::Char('p') | KeyCode::Char('P') => app.calendar_move_month(false),
        KeyCode::Enter => app.calendar_select_focused(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_timer(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_navigation(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Up => app.timer_move(false),
        KeyCode::Down => app.timer_move(true),
        KeyCode::Char(' ') | KeyCode::Enter => app.timer_toggle(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.timer_reset(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_settings(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Inline username editing captures all text keys
    if app.settings_editing_username {
        match key.code {
            KeyCode::Char(c) => {
                app.settings.username.push(c);
                app.settings_dirty = true;
            }
            KeyCode::Backspace => {
                app.settings.username.pop();
                app.settings_dirty = true;
            }
            KeyCode::Enter | KeyCode::Esc => app.settings_editing_username = false,
            _ => {}
        }
        return Ok(false);
    }

    if handle_navigation(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Up => app.settings_field = app.settings_field.saturating_sub(1),
        KeyCode::Down => {
            if app.settings_field < 2 {
                app.settings_field += 1;
            }
        }
        KeyCode::Enter => match app.settings_field {
            0 => app.settings_editing_username = true,
            1 => app.settings_cycle_locale(),
            2 => app.settings_cycle_theme(),
            _ => {}
        },
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.save_settings()?;
        }
        KeyCode::Char('l') | KeyCode::Char('L') => app.logout(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_login(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+R opens registration
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        app.open_register_form();
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::Down => {
            app.login_form.editing_field = (app.login_form.editing_field + 1) % 2;
        }
        KeyCode::Up => {
            app.login_form.editing_field = app.login_form.editing_field.saturating_sub(1);
        }
        KeyCode::Enter => app.login(),
        KeyCode::Backspace => match app.login_form.editing_field {
            0 => {
                app.login_form.username.pop();
            }
            _ => {
                app.login_form.password.pop();
            }
        },
        KeyCode::Char(c) => match app.login_form.editing_field {
            0 => app.login_form.username.push(c),
            _ => app.login_form.password.push(c),
        },
        _ => {}
    }
    Ok(false)
}

fn handle_register_form(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.ui_mode = UiMode::Normal,
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.editing_field = (app.register_form.editing_field + 1) % 3;
        }
        KeyCode::Up => {
            app.register_form.editing_field = app.register_form.editing_field.saturating_sub(1);
        }
        KeyCode::Enter => app.register(),
        KeyCode::Backspace => match app.register_form.editing_field {
            0 => {
                app.register_form.username.pop();
            }
            1 => {
                app.register_form.email.pop();
            }
            _ => {
                app.register_form.password.pop();
            }
        },
        KeyCode::Char(c) => match app.register_form.editing_field {
            0 => app.register_form.username.push(c),
            1 => app.register_form.email.push(c),
            _ => app.register_form.password.push(c),
        },
        _ => {}
    }
    Ok(false)
}

fn handle_task_form(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.close_task_form(),
        KeyCode::Tab => {
            if let Some(form) = app.task_form.as_mut() {
                form.editing_field = (form.editing_field + 1) % 3;
            }
        }
        KeyCode::Up | KeyCode::Down => {
            if let Some(form) = app.task_form.as_mut() {
                form.cycle_category();
            }
        }
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Backspace => {
            if let Some(form) = app.task_form.as_mut() {
                match form.editing_field {
                    0 => {
                        form.title.pop();
                    }
                    1 => {
                        form.description.pop();
                    }
                    _ => {
                        form.date_input.pop();
                    }
                }
                form.error = None;
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.task_form.as_mut() {
                match form.editing_field {
                    0 => form.title.push(c),
                    1 => form.description.push(c),
                    _ => form.date_input.push(c),
                }
                form.error = None;
            }
        }
        _ => {}
    }
    Ok(false)
}
