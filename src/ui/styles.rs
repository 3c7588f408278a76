use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Magenta),
        Theme::Dark => Style::default().fg(Color::White),
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Theme::Dark => Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    }
}

/// Category header style
pub fn header_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        Theme::Dark => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

/// Completed task style
pub fn done_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Theme::Dark => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::LightMagenta),
        Theme::Dark => Style::default().fg(Color::Gray),
    }
}

/// Active tab style
pub fn active_tab_style(theme: Theme) -> Style {
    selected_style(theme)
}

/// Inactive tab style
pub fn tab_style(theme: Theme) -> Style {
    default_style(theme)
}

/// Stopwatch digits style
pub fn timer_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Theme::Dark => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    }
}

/// Running status style
pub fn running_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Calendar day with tasks marker style
pub fn marked_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style(_theme: Theme) -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style(_theme: Theme) -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Stat card value style
pub fn card_value_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Theme::Dark => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}
