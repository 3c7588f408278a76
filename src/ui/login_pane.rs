use crate::app::AppState;
use crate::i18n::{tr, Text};
use crate::ui::layout::create_modal_area;
use crate::ui::styles::{
    border_style, default_style, error_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the Login screen
pub fn render_login_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;
    let form = &app.login_form;
    let modal_area = create_modal_area(area);

    let field_style = |field: usize| {
        if form.editing_field == field {
            selected_style(theme)
        } else {
            default_style(theme)
        }
    };

    let cursor = |field: usize| {
        if form.editing_field == field {
            "█"
        } else {
            ""
        }
    };

    let masked: String = "*".repeat(form.password.chars().count());

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", tr(locale, Text::Username)),
                field_style(0),
            ),
            Span::styled(format!("{}{}", form.username, cursor(0)), default_style(theme)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", tr(locale, Text::Password)),
                field_style(1),
            ),
            Span::styled(format!("{}{}", masked, cursor(1)), default_style(theme)),
        ]),
        Line::raw(""),
    ];

    if let Some(message) = &form.message {
        lines.push(Line::styled(message.clone(), error_style(theme)));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "Enter to log in  ·  Tab to switch fields",
        hint_style(theme),
    ));
    lines.push(Line::styled(
        format!("Ctrl+R: {}  ·  Esc to quit", tr(locale, Text::RegisterTitle)),
        hint_style(theme),
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(
                format!(" {} 🌸 ", tr(locale, Text::LoginTitle)),
                title_style(theme),
            )),
    );
    f.render_widget(paragraph, modal_area);
}

/// Render the registration form over the login screen
pub fn render_register_form(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;
    let form = &app.register_form;
    let modal_area = create_modal_area(area);

    f.render_widget(ratatui::widgets::Clear, modal_area);

    let field_style = |field: usize| {
        if form.editing_field == field {
            selected_style(theme)
        } else {
            default_style(theme)
        }
    };

    let cursor = |field: usize| {
        if form.editing_field == field {
            "█"
        } else {
            ""
        }
    };

    let masked: String = "*".repeat(form.password.chars().count());

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", tr(locale, Text::Username)),
                field_style(0),
            ),
            Span::styled(format!("{}{}", form.username, cursor(0)), default_style(theme)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("{}: ", tr(locale, Text::Email)), field_style(1)),
            Span::styled(format!("{}{}", form.email, cursor(1)), default_style(theme)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", tr(locale, Text::Password)),
                field_style(2),
            ),
            Span::styled(format!("{}{}", masked, cursor(2)), default_style(theme)),
        ]),
        Line::raw(""),
        Line::styled(
            "Enter to register  ·  Tab to switch fields  ·  Esc to cancel",
            hint_style(theme),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(
                format!(" {} ", tr(locale, Text::RegisterTitle)),
                title_style(theme),
            )),
    );
    f.render_widget(paragraph, modal_area);
}
