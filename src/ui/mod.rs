pub mod calendar_pane;
pub mod home_pane;
pub mod keybindings;
pub mod layout;
pub mod login_pane;
pub mod settings_pane;
pub mod styles;
pub mod task_form;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crate::ui::styles::{active_tab_style, tab_style};
use calendar_pane::render_calendar_pane;
use home_pane::render_home_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use login_pane::{render_login_pane, render_register_form};
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use settings_pane::render_settings_pane;
use task_form::render_task_form;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Login fills the whole frame, no tab bar
    if app.screen == Screen::Login {
        render_login_pane(f, app, size);
        if app.ui_mode == UiMode::Registering {
            render_register_form(f, app, size);
        }
        return;
    }

    let layout = create_layout(size);

    render_tabs(f, app, layout.tabs_area);

    match app.screen {
        Screen::Home => render_home_pane(f, app, layout.content_area),
        Screen::Calendar => render_calendar_pane(f, app, layout.content_area),
        Screen::Timer => render_timer_pane(f, app, layout.content_area),
        Screen::Settings => render_settings_pane(f, app, layout.content_area),
        Screen::Login => {}
    }

    render_keybindings(f, app, layout.keybindings_area);

    // Task form modal on top
    if app.task_form.is_some() {
        render_task_form(f, app, size);
    }
}

/// Render the top tab bar
fn render_tabs(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let theme = app.settings.theme;
    let mut spans = Vec::new();

    for (idx, screen) in Screen::tabs().iter().enumerate() {
        let style = if *screen == app.screen {
            active_tab_style(theme)
        } else {
            tab_style(theme)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", idx + 1, screen.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
