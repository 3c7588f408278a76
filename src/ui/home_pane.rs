use crate::app::AppState;
use crate::domain::{completion_stats, format_seconds, HomeRow};
use crate::i18n::{tr, Text};
use crate::ui::layout::create_home_layout;
use crate::ui::styles::{
    border_style, card_value_style, default_style, done_style, header_style, selected_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the Home screen: rate cards, remaining count, grouped list
pub fn render_home_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;
    let layout = create_home_layout(area);
    let stats = completion_stats(app.store.tasks());

    // Todo rate card
    let todo_card = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(tr(locale, Text::TodoTask), title_style(theme)),
        Line::styled(format!("{:.2}%", stats.todo_rate), card_value_style(theme)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme)),
    );
    f.render_widget(todo_card, layout.todo_card_area);

    // Done rate card
    let done_card = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(tr(locale, Text::DoneTask), title_style(theme)),
        Line::styled(format!("{:.2}%", stats.done_rate), card_value_style(theme)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme)),
    );
    f.render_widget(done_card, layout.done_card_area);

    // Remaining tasks line
    let remaining = Paragraph::new(Line::styled(
        format!("{}: {}", tr(locale, Text::RemainingTasks), stats.remaining),
        default_style(theme),
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, layout.remaining_area);

    // Grouped task list
    let rows = app.home_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let line = match row {
                HomeRow::Header(category) => {
                    Line::styled(category.label().to_string(), header_style(theme))
                }
                HomeRow::Task(id) => match app.store.get(*id) {
                    Some(task) => {
                        let mut spans = vec![Span::raw("  ")];
                        let checkbox = if task.completed { "[x] " } else { "[ ] " };
                        spans.push(Span::raw(checkbox));
                        if task.completed {
                            spans.push(Span::styled(task.title.clone(), done_style(theme)));
                        } else {
                            spans.push(Span::raw(task.title.clone()));
                        }
                        if let Some(secs) = task.time_spent {
                            spans.push(Span::raw(format!(
                                "  · {}: {}",
                                tr(locale, Text::TimeSpent),
                                format_seconds(secs)
                            )));
                        }
                        if let Some(edited) = task.updated_at {
                            spans.push(Span::raw(format!(
                                "  · {} {}",
                                tr(locale, Text::EditedAt),
                                edited.format("%H:%M")
                            )));
                        }
                        Line::from(spans)
                    }
                    None => Line::raw(""),
                },
            };

            let style = if idx == app.home_selected && matches!(row, HomeRow::Task(_)) {
                selected_style(theme)
            } else {
                default_style(theme)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(" Petal 🌸 ", title_style(theme))),
    );
    f.render_widget(list, layout.list_area);
}
