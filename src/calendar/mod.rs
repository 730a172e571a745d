mod grid;
mod state;
mod widget;
pub(crate) use self::grid::WeekStart;
pub(crate) use self::state::CalendarState;
pub(crate) use self::widget::MonthView;
use crate::stickers::DaySummary;
use time::Date;

/// Source of the per-day sticker counts shown on the grid.
pub(crate) trait DaySummarizer {
    fn day_summary(&self, date: Date) -> DaySummary;
}
