use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) mod calendar {
    use super::*;

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const SELECTED_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);

    pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod sessions {
    use super::*;

    pub(crate) const HEADING_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const CURSOR_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const COMPLETED_STYLE: Style = BASE_STYLE.fg(Color::LightGreen);

    pub(crate) const FAILED_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

    pub(crate) const REMOVE_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const EMPTY_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const RING_FILLED_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

    pub(crate) const RING_EMPTY_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}
