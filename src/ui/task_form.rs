use crate::app::AppState;
use crate::i18n::{tr, Text};
use crate::ui::layout::create_modal_area;
use crate::ui::styles::{error_style, hint_style, modal_bg_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.task_form else {
        return;
    };
    let theme = app.settings.theme;
    let locale = app.settings.locale;
    let modal_area = create_modal_area(area);

    f.render_widget(Clear, modal_area);

    let title_text = if form.editing.is_some() {
        format!(" {} ", tr(locale, Text::EditTask))
    } else {
        format!(" {} ", tr(locale, Text::AddTask))
    };

    let field_line = |label: &str, value: &str, field: usize| {
        let label = if form.editing_field == field {
            format!("{}: (editing)", label)
        } else {
            format!("{}:", label)
        };
        let mut value_spans = vec![
            Span::raw("> "),
            Span::styled(value.to_string(), modal_title_style(theme)),
        ];
        if form.editing_field == field {
            value_spans.push(Span::styled("█", modal_title_style(theme)));
        }
        (Line::raw(label), Line::from(value_spans))
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    let (label, value) = field_line(tr(locale, Text::TaskTitle), &form.title, 0);
    lines.push(label);
    lines.push(value);
    lines.push(Line::raw(""));

    let (label, value) = field_line(tr(locale, Text::TaskDescription), &form.description, 1);
    lines.push(label);
    lines.push(value);
    lines.push(Line::raw(""));

    let (label, value) = field_line(tr(locale, Text::DateLabel), &form.date_input, 2);
    lines.push(label);
    lines.push(value);
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::raw(format!("{}: ", tr(locale, Text::CategoryLabel))),
        Span::styled(form.category().label(), modal_title_style(theme)),
        Span::raw("  (Up/Down to change)"),
    ]));
    lines.push(Line::raw(""));

    if let Some(error) = form.error {
        lines.push(Line::styled(error, error_style(theme)));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
        hint_style(theme),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style(theme)))
                .style(modal_bg_style(theme)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
