use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

// Same palette as the web app: blue marks good habits, red bad ones, and
// today gets a solid blue box.
pub(crate) const POSITIVE_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const NEGATIVE_STYLE: Style = Style::new().fg(Color::LightRed).bg(Color::Black);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

pub(crate) const DIM_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const ERROR_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);
