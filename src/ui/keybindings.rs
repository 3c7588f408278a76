use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the bottom keybinding hints bar for the active screen
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingTask | UiMode::Registering => {
            "Tab: field · Enter: submit · Esc: cancel"
        }
        UiMode::Normal => match app.screen {
            Screen::Login => "Enter: login · Ctrl+R: register · Esc: quit",
            Screen::Home => {
                "↑/↓: select · Space: toggle · a: add · e: edit · x: delete · 1-4/Tab: screens · q: quit"
            }
            Screen::Calendar => {
                "←/→/↑/↓: move · n/p: month · Enter: pick day · 1-4/Tab: screens · q: quit"
            }
            Screen::Timer => {
                "↑/↓: pick task · Space: start/stop · r: reset · 1-4/Tab: screens · q: quit"
            }
            Screen::Settings => {
                "↑/↓: field · Enter: edit/cycle · s: save · l: logout · 1-4/Tab: screens · q: quit"
            }
        },
    };

    let bar = Paragraph::new(Line::styled(hints, hint_style(app.settings.theme)));
    f.render_widget(bar, area);
}
