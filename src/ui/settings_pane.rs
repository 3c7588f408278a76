use crate::app::AppState;
use crate::i18n::{tr, Text};
use crate::ui::styles::{
    border_style, default_style, hint_style, running_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the Settings screen: username, locale, theme, save state
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;

    let username_display = if app.settings.username.is_empty() {
        "User".to_string()
    } else {
        app.settings.username.clone()
    };

    let field_style = |field: usize| {
        if app.settings_field == field {
            selected_style(theme)
        } else {
            default_style(theme)
        }
    };

    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            format!("{}, {}", tr(locale, Text::WelcomeBack), username_display),
            title_style(theme),
        ),
        Line::raw(""),
    ];

    // Username field
    let username_value = if app.settings_editing_username {
        format!("{}█", app.settings.username)
    } else {
        app.settings.username.clone()
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", tr(locale, Text::Username)),
            field_style(0),
        ),
        Span::styled(username_value, default_style(theme)),
    ]));
    lines.push(Line::raw(""));

    // Locale field
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", tr(locale, Text::Localization)),
            field_style(1),
        ),
        Span::styled(locale.label(), default_style(theme)),
    ]));
    lines.push(Line::raw(""));

    // Theme field
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", tr(locale, Text::ThemeLabel)),
            field_style(2),
        ),
        Span::styled(theme.label(), default_style(theme)),
    ]));
    lines.push(Line::raw(""));

    if let Some(message) = app.settings_message {
        lines.push(Line::styled(message, running_style(theme)));
    } else if app.settings_dirty {
        lines.push(Line::styled("(unsaved changes)", hint_style(theme)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(" Settings ", title_style(theme))),
    );
    f.render_widget(paragraph, area);
}
