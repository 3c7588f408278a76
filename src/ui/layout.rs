use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: screen tabs (1 row)
/// - Middle: screen content
/// - Bottom bar: keybinding hints (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        content_area: chunks[1],
        keybindings_area: chunks[2],
    }
}

/// Home screen layout: stat cards row above the grouped task list
pub struct HomeLayout {
    pub todo_card_area: Rect,
    pub done_card_area: Rect,
    pub remaining_area: Rect,
    pub list_area: Rect,
}

pub fn create_home_layout(area: Rect) -> HomeLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Rate cards
            Constraint::Length(1), // Remaining tasks line
            Constraint::Min(0),    // Task list
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    HomeLayout {
        todo_card_area: cards[0],
        done_card_area: cards[1],
        remaining_area: rows[1],
        list_area: rows[2],
    }
}

/// Calendar screen layout: month grid on the left, day tasks on the right
pub struct CalendarLayout {
    pub grid_area: Rect,
    pub day_area: Rect,
}

pub fn create_calendar_layout(area: Rect) -> CalendarLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    CalendarLayout {
        grid_area: chunks[0],
        day_area: chunks[1],
    }
}

/// Timer screen layout: stopwatch display above the task picker
pub struct TimerLayout {
    pub clock_area: Rect,
    pub picker_area: Rect,
}

pub fn create_timer_layout(area: Rect) -> TimerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    TimerLayout {
        clock_area: chunks[0],
        picker_area: chunks[1],
    }
}

/// Create centered modal area (for the task and register forms)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
