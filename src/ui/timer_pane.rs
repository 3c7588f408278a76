use crate::app::AppState;
use crate::domain::format_seconds;
use crate::i18n::{tr, Text};
use crate::ui::layout::create_timer_layout;
use crate::ui::styles::{
    border_style, default_style, hint_style, running_style, selected_style, timer_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the Timer screen: stopwatch display and incomplete-task picker
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;
    let layout = create_timer_layout(area);

    // Stopwatch display
    let status = if app.stopwatch.is_running() {
        Line::styled(tr(locale, Text::Stop), running_style(theme))
    } else {
        Line::styled(tr(locale, Text::Start), hint_style(theme))
    };
    let clock = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(app.stopwatch.display_formatted(), timer_style(theme)),
        status,
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(" Stopwatch ", title_style(theme))),
    );
    f.render_widget(clock, layout.clock_area);

    // Task picker over incomplete tasks
    let open_tasks = app.store.incomplete();
    let items: Vec<ListItem> = if open_tasks.is_empty() {
        vec![ListItem::new(Line::styled(
            tr(locale, Text::NoOpenTasks),
            hint_style(theme),
        ))]
    } else {
        open_tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let mut spans = vec![Span::raw(task.title.clone())];
                if let Some(secs) = task.time_spent {
                    spans.push(Span::raw(format!(
                        "  · {}: {}",
                        tr(locale, Text::TimeSpent),
                        format_seconds(secs)
                    )));
                }

                let style = if idx == app.timer_selected {
                    selected_style(theme)
                } else {
                    default_style(theme)
                };
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(
                format!(" {} ", tr(locale, Text::PickTask)),
                title_style(theme),
            )),
    );
    f.render_widget(list, layout.picker_area);
}
