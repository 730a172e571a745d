use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, Month, Weekday};

const DAYS_IN_WEEK: u8 = 7;

/// Which weekday occupies column 0 of the grid.
///
/// The web version of the tracker always rendered Monday-first even though
/// the profile stores a preference; here the preference is honored.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn offset(self) -> u8 {
        match self {
            WeekStart::Monday => 1,
            WeekStart::Sunday => 0,
        }
    }

    /// Grid column (0-6) in which the given weekday falls.
    pub(crate) fn column(self, wd: Weekday) -> u8 {
        (wd.number_days_from_sunday() + DAYS_IN_WEEK - self.offset()) % DAYS_IN_WEEK
    }

    /// The seven weekdays in column order.
    pub(crate) fn weekdays(self) -> [Weekday; 7] {
        let mut wd = match self {
            WeekStart::Monday => Weekday::Monday,
            WeekStart::Sunday => Weekday::Sunday,
        };
        std::array::from_fn(|_| {
            let current = wd;
            wd = wd.next();
            current
        })
    }
}

pub(crate) fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
        Weekday::Sunday => "Su",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct YearMonth {
    pub(crate) year: i32,
    pub(crate) month: Month,
}

impl YearMonth {
    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn next(self) -> YearMonth {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.next(),
        }
    }

    pub(crate) fn prev(self) -> YearMonth {
        let year = if self.month == Month::January {
            self.year - 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.previous(),
        }
    }

    pub(crate) fn days(self) -> u8 {
        self.month.length(self.year)
    }

    /// Returns `None` when the year falls outside the range `time` supports.
    pub(crate) fn day(self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, day).ok()
    }

    pub(crate) fn first_day(self) -> Option<Date> {
        self.day(1)
    }

    /// The given day of this month, pulled back to the last day when the
    /// month is shorter.
    pub(crate) fn clamp_day(self, day: u8) -> Option<Date> {
        self.day(day.min(self.days()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The cell sequence for one displayed month: `None` padding cells aligning
/// day 1 under its weekday column, then every day of the month in order.
/// There is no trailing padding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    cells: Vec<Option<Date>>,
}

impl MonthGrid {
    pub(crate) fn new(ym: YearMonth, week_start: WeekStart) -> MonthGrid {
        let first = ym
            .first_day()
            .expect("displayed month should be within the supported year range");
        let padding = usize::from(week_start.column(first.weekday()));
        let mut cells = Vec::with_capacity(padding + usize::from(ym.days()));
        cells.resize(padding, None);
        for day in 1..=ym.days() {
            let date = first
                .replace_day(day)
                .expect("every day up to the month's length should be valid");
            cells.push(Some(date));
        }
        MonthGrid { cells }
    }

    pub(crate) fn padding(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    pub(crate) fn cells(&self) -> &[Option<Date>] {
        &self.cells
    }

    pub(crate) fn weeks(&self) -> impl Iterator<Item = &[Option<Date>]> + '_ {
        self.cells.chunks(usize::from(DAYS_IN_WEEK))
    }
}

/// Click-to-select semantics: selecting the already-selected date clears the
/// selection.  There is no multi-select.
pub(crate) fn toggle(current: Option<Date>, clicked: Date) -> Option<Date> {
    (current != Some(clicked)).then_some(clicked)
}
