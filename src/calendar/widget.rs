use super::grid::weekday_abbrev;
use super::state::CalendarState;
use super::DaySummarizer;
use crate::theme::{
    BASE_STYLE, NEGATIVE_STYLE, POSITIVE_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE,
    WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::StatefulWidget,
};

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the grid in columns
const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the title and the weekday header
const HEADER_LINES: u16 = 2;

/// Number of lines taken up by each week: the day numbers plus the sticker
/// marks beneath them
const WEEK_LINES: u16 = 2;

#[derive(Debug)]
pub(crate) struct MonthView<'a, S> {
    summaries: &'a S,
}

impl<'a, S: DaySummarizer> MonthView<'a, S> {
    pub(crate) fn new(summaries: &'a S) -> MonthView<'a, S> {
        MonthView { summaries }
    }
}

impl<S: DaySummarizer> StatefulWidget for MonthView<'_, S> {
    type State = CalendarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut CalendarState) {
        let left = area.width.saturating_sub(GRID_WIDTH) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(GRID_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let mut canvas = Canvas::new(chunks[1], buf);

        let title = state.ym().to_string();
        let title_width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        canvas.put(0, GRID_WIDTH.saturating_sub(title_width) / 2, &title, TITLE_STYLE);
        for (col, wd) in std::iter::zip(0u16.., state.week_start().weekdays()) {
            canvas.put(
                1,
                col * DAY_WIDTH,
                &format!(" {} ", weekday_abbrev(wd)),
                WEEKDAY_STYLE,
            );
        }

        let today = state.today();
        let cursor = state.cursor();
        let selected = state.selected();
        let grid = state.grid();
        for (row, week) in std::iter::zip(0u16.., grid.weeks()) {
            let y = HEADER_LINES + row * WEEK_LINES;
            for (col, cell) in std::iter::zip(0u16.., week.iter().copied()) {
                let Some(date) = cell else {
                    continue;
                };
                let x = col * DAY_WIDTH;
                let day = date.day();
                let content = if date == cursor {
                    format!("[{day:2}]")
                } else {
                    format!(" {day:2} ")
                };
                let style = if date == today {
                    TODAY_STYLE
                } else if selected == Some(date) {
                    SELECTED_STYLE
                } else {
                    BASE_STYLE
                };
                canvas.put(y, x, &content, style);
                // Today is already a solid box; marks under it would be
                // noise.
                let summary = self.summaries.day_summary(date);
                if !summary.is_empty() && date != today {
                    if summary.positive > 0 {
                        canvas.put(y + 1, x + 1, "+", POSITIVE_STYLE);
                    }
                    if summary.negative > 0 {
                        canvas.put(y + 1, x + 2, "-", NEGATIVE_STYLE);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> Canvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Canvas<'a> {
        Canvas { area, buf }
    }

    // Coordinates are relative to the canvas area; anything outside it is
    // clipped rather than drawn.
    fn put(&mut self, y: u16, x: u16, s: &str, style: Style) {
        if y < self.area.height && x < self.area.width {
            let max = usize::from(self.area.width - x);
            self.buf
                .set_stringn(self.area.x + x, self.area.y + y, s, max, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekStart;
    use crate::stickers::DaySummary;
    use time::macros::date;
    use time::Date;

    struct Fixture;

    impl DaySummarizer for Fixture {
        fn day_summary(&self, date: Date) -> DaySummary {
            match date {
                d if d == date!(2025 - 06 - 01) => DaySummary {
                    positive: 2,
                    negative: 1,
                },
                d if d == date!(2025 - 06 - 02) => DaySummary {
                    positive: 1,
                    negative: 0,
                },
                d if d == date!(2025 - 06 - 03) => DaySummary {
                    positive: 3,
                    negative: 2,
                },
                d if d == date!(2025 - 06 - 04) => DaySummary {
                    positive: 2,
                    negative: 0,
                },
                _ => DaySummary::default(),
            }
        }
    }

    fn content_lines(buf: &Buffer) -> Vec<String> {
        let area = *buf.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf.cell((x, y)).expect("cell within area").symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_render_june_2025() {
        let mut state = CalendarState::new(date!(2025 - 06 - 04), WeekStart::Monday);
        let area = Rect::new(0, 0, 28, 16);
        let mut buffer = Buffer::empty(area);
        MonthView::new(&Fixture).render(area, &mut buffer, &mut state);
        assert_eq!(
            content_lines(&buffer),
            [
                "         June 2025          ",
                " Mo  Tu  We  Th  Fr  Sa  Su ",
                "                          1 ",
                "                         +- ",
                "  2   3 [ 4]  5   6   7   8 ",
                " +   +-                     ",
                "  9  10  11  12  13  14  15 ",
                "                            ",
                " 16  17  18  19  20  21  22 ",
                "                            ",
                " 23  24  25  26  27  28  29 ",
                "                            ",
                " 30                         ",
                "                            ",
                "                            ",
                "                            ",
            ]
        );
        let today_cell = buffer.cell((10, 4)).expect("today's cell");
        assert_eq!(today_cell.style(), TODAY_STYLE);
    }

    #[test]
    fn test_render_marks_selection() {
        let mut state = CalendarState::new(date!(2025 - 06 - 04), WeekStart::Monday)
            .start_date(date!(2025 - 06 - 10));
        state.toggle_selected();
        // Move the cursor off the selection so the selected style shows.
        assert!(state.cursor_right());
        let area = Rect::new(0, 0, 28, 16);
        let mut buffer = Buffer::empty(area);
        MonthView::new(&Fixture).render(area, &mut buffer, &mut state);
        let lines = content_lines(&buffer);
        assert_eq!(lines[6], "  9  10 [11] 12  13  14  15 ");
        let selected_cell = buffer.cell((5, 6)).expect("selected cell");
        assert_eq!(selected_cell.style(), SELECTED_STYLE);
    }

    #[test]
    fn test_render_clips_to_narrow_area() {
        let mut state = CalendarState::new(date!(2025 - 06 - 04), WeekStart::Monday);
        let area = Rect::new(0, 0, 10, 4);
        let mut buffer = Buffer::empty(area);
        // Must not panic; content beyond the area is dropped.
        MonthView::new(&Fixture).render(area, &mut buffer, &mut state);
    }
}
