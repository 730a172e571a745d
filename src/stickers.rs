use crate::calendar::DaySummarizer;
use crate::habits::Habit;
use crate::theme::{BASE_STYLE, DIM_STYLE, NEGATIVE_STYLE, POSITIVE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Polarity {
    Positive,
    Negative,
}

/// One recorded habit event: a sticker placed on a day, tagged with the
/// habit's polarity.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Sticker {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) date: Date,
    pub(crate) polarity: Polarity,
    pub(crate) label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) category: Option<String>,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

/// Counts of positive and negative stickers on a single day.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DaySummary {
    pub(crate) positive: u32,
    pub(crate) negative: u32,
}

impl DaySummary {
    pub(crate) fn is_empty(self) -> bool {
        self.positive == 0 && self.negative == 0
    }
}

/// Per-day summaries keyed by date.  Days without stickers are simply
/// absent; looking them up yields zero counts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SummaryMap(BTreeMap<Date, DaySummary>);

impl SummaryMap {
    pub(crate) fn get(&self, date: Date) -> DaySummary {
        self.0.get(&date).copied().unwrap_or_default()
    }
}

impl FromIterator<(Date, DaySummary)> for SummaryMap {
    fn from_iter<I: IntoIterator<Item = (Date, DaySummary)>>(iter: I) -> SummaryMap {
        SummaryMap(iter.into_iter().collect())
    }
}

impl DaySummarizer for SummaryMap {
    fn day_summary(&self, date: Date) -> DaySummary {
        self.get(date)
    }
}

/// All of a user's stickers, in the order they were recorded.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct StickerBook {
    stickers: Vec<Sticker>,
}

impl StickerBook {
    pub(crate) fn summarize(&self) -> SummaryMap {
        let mut map = BTreeMap::<Date, DaySummary>::new();
        for sticker in &self.stickers {
            let entry = map.entry(sticker.date).or_default();
            match sticker.polarity {
                Polarity::Positive => entry.positive += 1,
                Polarity::Negative => entry.negative += 1,
            }
        }
        SummaryMap(map)
    }

    pub(crate) fn is_done(&self, habit: &Habit, date: Date) -> bool {
        let id = habit_sticker_id(habit, date);
        self.stickers.iter().any(|s| s.id == id)
    }

    /// Places a sticker for the habit on the given day, or peels it back off
    /// if one is already there.  Returns `true` when the sticker is now set.
    pub(crate) fn toggle(
        &mut self,
        habit: &Habit,
        date: Date,
        user_id: &str,
        now: OffsetDateTime,
    ) -> bool {
        let id = habit_sticker_id(habit, date);
        if let Some(i) = self.stickers.iter().position(|s| s.id == id) {
            self.stickers.remove(i);
            false
        } else {
            self.stickers.push(Sticker {
                id,
                user_id: user_id.to_owned(),
                date,
                polarity: habit.polarity,
                label: habit.name.clone(),
                category: None,
                created_at: now,
                updated_at: now,
            });
            true
        }
    }
}

// Sticker ids for checklist toggles are deterministic so that toggling twice
// finds and removes the record it created.
fn habit_sticker_id(habit: &Habit, date: Date) -> String {
    format!("{date}:{}", habit.id)
}

/// Side-panel summary of a single day's counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SummaryView {
    pub(crate) date: Date,
    pub(crate) summary: DaySummary,
    pub(crate) pinned: bool,
}

impl Widget for SummaryView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!(" {} ", self.date));
        let inner = block.inner(area);
        block.render(area, buf);
        let positive = self.summary.positive;
        let negative = self.summary.negative;
        let lines = vec![
            Line::styled(self.date.weekday().to_string(), BASE_STYLE),
            Line::styled(format!("good {positive:>3}"), POSITIVE_STYLE),
            Line::styled(format!("bad  {negative:>3}"), NEGATIVE_STYLE),
            Line::styled(
                if self.pinned { "selected" } else { "at cursor" },
                DIM_STYLE,
            ),
        ];
        Paragraph::new(Text::from(lines)).render(inner, buf);
    }
}
