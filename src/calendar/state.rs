use super::grid::{toggle, MonthGrid, WeekStart, YearMonth};
use time::{Date, Duration};

/// Per-session view state: the displayed month, the cursor date, and the at
/// most one selected date.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarState {
    today: Date,
    ym: YearMonth,
    cursor: Date,
    selected: Option<Date>,
    week_start: WeekStart,
}

impl CalendarState {
    pub(crate) fn new(today: Date, week_start: WeekStart) -> CalendarState {
        CalendarState {
            today,
            ym: YearMonth::of(today),
            cursor: today,
            selected: None,
            week_start,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> CalendarState {
        self.cursor = date;
        self.ym = YearMonth::of(date);
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn ym(&self) -> YearMonth {
        self.ym
    }

    pub(crate) fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The date whose summary the side panel shows: the selection if there
    /// is one, else the cursor.
    pub(crate) fn focus_date(&self) -> Date {
        self.selected.unwrap_or(self.cursor)
    }

    pub(crate) fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.ym, self.week_start)
    }

    // Returns `false` when the move would leave the supported date range.
    fn move_cursor(&mut self, to: Option<Date>) -> bool {
        if let Some(date) = to {
            self.cursor = date;
            // Crossing a month edge scrolls the display to the new month.
            self.ym = YearMonth::of(date);
            true
        } else {
            false
        }
    }

    pub(crate) fn cursor_left(&mut self) -> bool {
        self.move_cursor(self.cursor.previous_day())
    }

    pub(crate) fn cursor_right(&mut self) -> bool {
        self.move_cursor(self.cursor.next_day())
    }

    pub(crate) fn cursor_up(&mut self) -> bool {
        self.move_cursor(self.cursor.checked_sub(Duration::weeks(1)))
    }

    pub(crate) fn cursor_down(&mut self) -> bool {
        self.move_cursor(self.cursor.checked_add(Duration::weeks(1)))
    }

    fn show_month(&mut self, ym: YearMonth) -> bool {
        // Keep the cursor on the same day-of-month where possible, pulled
        // back when the new month is shorter.
        if let Some(cursor) = ym.clamp_day(self.cursor.day()) {
            self.ym = ym;
            self.cursor = cursor;
            true
        } else {
            false
        }
    }

    pub(crate) fn month_forwards(&mut self) -> bool {
        self.show_month(self.ym.next())
    }

    pub(crate) fn month_backwards(&mut self) -> bool {
        self.show_month(self.ym.prev())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.cursor = self.today;
        self.ym = YearMonth::of(self.today);
    }

    pub(crate) fn toggle_selected(&mut self) {
        self.selected = toggle(self.selected, self.cursor);
    }
}
