use crate::calendar::{CalendarState, MonthView};
use crate::habits::ChecklistView;
use crate::help::Help;
use crate::provider::ErrorCode;
use crate::stickers::SummaryView;
use crate::store::Book;
use crate::theme::{BASE_STYLE, DIM_STYLE, ERROR_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    cal: CalendarState,
    book: Book,
    uid: String,
    sync_error: Option<ErrorCode>,
    habit_cursor: usize,
    focus: Focus,
    state: AppState,
}

impl App {
    pub(crate) fn new(cal: CalendarState, book: Book) -> App {
        let uid = book
            .profile
            .as_ref()
            .map_or_else(|| "local".to_owned(), |p| p.uid.clone());
        let sync_error = book.last_sync_error.as_deref().map(ErrorCode::parse);
        App {
            cal,
            book,
            uid,
            sync_error,
            habit_cursor: 0,
            focus: Focus::Grid,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    pub(crate) fn into_book(self) -> Book {
        self.book
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Tab => {
                    self.focus = self.focus.toggled();
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => match self.focus {
                    Focus::Grid => self.cal.cursor_left(),
                    Focus::Checklist => false,
                },
                KeyCode::Right | KeyCode::Char('l') => match self.focus {
                    Focus::Grid => self.cal.cursor_right(),
                    Focus::Checklist => false,
                },
                KeyCode::Up | KeyCode::Char('k') => match self.focus {
                    Focus::Grid => self.cal.cursor_up(),
                    Focus::Checklist => self.habit_up(),
                },
                KeyCode::Down | KeyCode::Char('j') => match self.focus {
                    Focus::Grid => self.cal.cursor_down(),
                    Focus::Checklist => self.habit_down(),
                },
                KeyCode::Char('[') | KeyCode::PageUp => self.cal.month_backwards(),
                KeyCode::Char(']') | KeyCode::PageDown => self.cal.month_forwards(),
                KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.cal.jump_to_today();
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn activate(&mut self) -> bool {
        match self.focus {
            Focus::Grid => {
                self.cal.toggle_selected();
                true
            }
            Focus::Checklist => {
                if let Some(habit) = self.book.habits.get(self.habit_cursor).cloned() {
                    let now = OffsetDateTime::now_utc();
                    self.book
                        .stickers
                        .toggle(&habit, self.cal.today(), &self.uid, now);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn habit_up(&mut self) -> bool {
        if self.habit_cursor > 0 {
            self.habit_cursor -= 1;
            true
        } else {
            false
        }
    }

    fn habit_down(&mut self) -> bool {
        if self.habit_cursor + 1 < self.book.habits.len() {
            self.habit_cursor += 1;
            true
        } else {
            false
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [cal_area, side_area] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(32)]).areas(main_area);

        let summaries = self.book.stickers.summarize();
        MonthView::new(&summaries).render(cal_area, buf, &mut self.cal);

        let checklist_height = u16::try_from(self.book.habits.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let [checklist_area, summary_area] =
            Layout::vertical([Constraint::Length(checklist_height), Constraint::Min(0)])
                .areas(side_area);
        ChecklistView::new(
            &self.book.habits,
            &self.book.stickers,
            self.cal.today(),
            self.habit_cursor,
            self.focus == Focus::Checklist,
        )
        .render(checklist_area, buf);
        let focus_date = self.cal.focus_date();
        SummaryView {
            date: focus_date,
            summary: summaries.get(focus_date),
            pinned: self.cal.selected().is_some(),
        }
        .render(summary_area, buf);

        let status = match &self.sync_error {
            Some(code) => Line::styled(format!("sync failed: {code}"), ERROR_STYLE),
            None => Line::styled("q quit / ? help / tab focus", DIM_STYLE),
        };
        Paragraph::new(status).render(status_area, buf);

        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Focus {
    Grid,
    Checklist,
}

impl Focus {
    fn toggled(self) -> Focus {
        match self {
            Focus::Grid => Focus::Checklist,
            Focus::Checklist => Focus::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekStart;
    use time::macros::date;

    fn app() -> App {
        let cal = CalendarState::new(date!(2025 - 06 - 04), WeekStart::Monday);
        App::new(cal, Book::starter())
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
    fn test_quit_keys() {
        let mut by_q = app();
        assert!(by_q.handle_key(KeyCode::Char('q')));
        assert!(by_q.quitting());
        let mut by_esc = app();
        assert!(by_esc.handle_key(KeyCode::Esc));
        assert!(by_esc.quitting());
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_grid_selection_toggle() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.cal.selected(), Some(date!(2025 - 06 - 04)));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.cal.selected(), None);
    }

    #[test]
    fn test_checklist_toggle_places_a_sticker() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Tab));
        assert!(app.handle_key(KeyCode::Down));
        assert!(app.handle_key(KeyCode::Enter));
        let habit = app.book.habits[1].clone();
        assert!(app.book.stickers.is_done(&habit, date!(2025 - 06 - 04)));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(!app.book.stickers.is_done(&habit, date!(2025 - 06 - 04)));
    }

    #[test]
    fn test_checklist_cursor_stops_at_the_ends() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Tab));
        assert!(!app.handle_key(KeyCode::Up));
        let last = app.book.habits.len() - 1;
        for _ in 0..last {
            assert!(app.handle_key(KeyCode::Down));
        }
        assert!(!app.handle_key(KeyCode::Down));
        assert_eq!(app.habit_cursor, last);
    }

    #[test]
    fn test_month_keys_move_the_display() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::PageDown));
        assert_eq!(app.cal.ym().month, time::Month::July);
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::PageUp));
        assert_eq!(app.cal.ym().month, time::Month::May);
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.cal.cursor(), date!(2025 - 06 - 04));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn test_render_shows_status_hints() {
        let mut app = app();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&mut app).render(area, &mut buffer);
        let lines = content_lines(&buffer);
        assert!(lines[23].contains("q quit / ? help / tab focus"));
        assert!(lines.iter().any(|l| l.contains("June 2025")));
        assert!(lines.iter().any(|l| l.contains("Today's habits")));
    }

    #[test]
    fn test_render_surfaces_the_last_sync_error() {
        let cal = CalendarState::new(date!(2025 - 06 - 04), WeekStart::Monday);
        let mut book = Book::starter();
        book.last_sync_error = Some("auth/too-many-requests".to_owned());
        let mut app = App::new(cal, book);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&mut app).render(area, &mut buffer);
        let lines = content_lines(&buffer);
        assert!(lines[23].contains("sync failed: too many attempts"));
    }
}
