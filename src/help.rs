use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static BINDINGS: &[(&str, &str)] = &[
    ("ARROWS", "Move the cursor"),
    ("ENTER, SPACE", "Toggle selection / habit"),
    ("[, PAGE UP", "Previous month"),
    ("], PAGE DOWN", "Next month"),
    ("TAB", "Switch focus"),
    ("0, HOME", "Jump to today"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

/// Centered key-binding overlay shown over the calendar.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = BINDINGS
            .iter()
            .map(|&(keys, action)| Line::raw(format!("{keys:<15} {action}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.width);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        // Clear one extra column on each side so the overlay does not sit
        // flush against the calendar text.
        let margin_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(margin_area, buf);
        Block::new().style(BASE_STYLE).render(margin_area, buf);
        para.render(help_area, buf);
    }
}
