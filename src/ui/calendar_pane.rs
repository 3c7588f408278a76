use crate::app::{days_in_month, AppState};
use crate::domain::{marked_dates, tasks_on};
use crate::i18n::{tr, Text};
use crate::ui::layout::create_calendar_layout;
use crate::ui::styles::{
    border_style, default_style, hint_style, marked_style, selected_style, title_style,
};
use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the Calendar screen: month grid plus the selected day's tasks
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = create_calendar_layout(area);

    render_month_grid(f, app, layout.grid_area);
    render_day_tasks(f, app, layout.day_area);
}

fn render_month_grid(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let focus = app.calendar_focus;
    let marked = marked_dates(app.store.tasks());

    let mut lines = Vec::new();
    lines.push(Line::styled(
        "Mo Tu We Th Fr Sa Su",
        hint_style(theme),
    ));

    let first = NaiveDate::from_ymd_opt(focus.year(), focus.month(), 1).unwrap_or(focus);
    let leading = first.weekday().num_days_from_monday() as usize;
    let total_days = days_in_month(focus.year(), focus.month());

    let mut spans: Vec<Span> = vec![Span::raw("   ".repeat(leading))];
    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(focus.year(), focus.month(), day).unwrap_or(first);

        let style = if date == focus {
            selected_style(theme)
        } else if marked.contains(&date) {
            marked_style(theme)
        } else {
            default_style(theme)
        };
        spans.push(Span::styled(format!("{:>2}", day), style));
        spans.push(Span::raw(" "));

        if date.weekday() == Weekday::Sun || day == total_days {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
    }

    let title = format!(" {} ", focus.format("%B %Y"));
    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(title, title_style(theme))),
    );
    f.render_widget(grid, area);
}

fn render_day_tasks(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let locale = app.settings.locale;

    let title = match app.calendar_selected {
        Some(date) => format!(" {}: {} ", tr(locale, Text::SelectedDate), date),
        None => format!(" {} ", tr(locale, Text::SelectedDate)),
    };

    let items: Vec<ListItem> = match app.calendar_selected {
        Some(date) => {
            let on_day = tasks_on(app.store.tasks(), date);
            if on_day.is_empty() {
                vec![ListItem::new(Line::styled(
                    tr(locale, Text::NoTasks),
                    hint_style(theme),
                ))]
            } else {
                on_day
                    .iter()
                    .flat_map(|task| {
                        let mut rows = vec![ListItem::new(Line::styled(
                            task.title.clone(),
                            default_style(theme),
                        ))];
                        if !task.description.is_empty() {
                            rows.push(ListItem::new(Line::styled(
                                format!("  {}", task.description),
                                hint_style(theme),
                            )));
                        }
                        rows
                    })
                    .collect()
            }
        }
        None => vec![ListItem::new(Line::styled(
            tr(locale, Text::NoTasks),
            hint_style(theme),
        ))],
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(title, title_style(theme))),
    );
    f.render_widget(list, area);
}
