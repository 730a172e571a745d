use crate::stickers::{Polarity, StickerBook};
use crate::theme::{BASE_STYLE, NEGATIVE_STYLE, POSITIVE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Habit {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) polarity: Polarity,
    #[serde(default)]
    pub(crate) icon: String,
}

impl Habit {
    fn new(id: &str, name: &str, polarity: Polarity, icon: &str) -> Habit {
        Habit {
            id: id.to_owned(),
            name: name.to_owned(),
            polarity,
            icon: icon.to_owned(),
        }
    }
}

/// The starter checklist used until the data file defines its own habits.
pub(crate) fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("water", "Drink 8 glasses of water", Polarity::Positive, "💧"),
        Habit::new("exercise", "Exercise 30 minutes", Polarity::Positive, "🏃"),
        Habit::new("reading", "Read 30 minutes", Polarity::Positive, "📚"),
        Habit::new("late-snack", "Late-night snacking", Polarity::Negative, "🍟"),
        Habit::new("phone", "Phone overuse", Polarity::Negative, "📱"),
    ]
}

/// Today's checklist: one line per habit with its sticker state, plus a
/// footer totalling the day.
#[derive(Debug)]
pub(crate) struct ChecklistView<'a> {
    habits: &'a [Habit],
    book: &'a StickerBook,
    today: Date,
    cursor: usize,
    focused: bool,
}

impl<'a> ChecklistView<'a> {
    pub(crate) fn new(
        habits: &'a [Habit],
        book: &'a StickerBook,
        today: Date,
        cursor: usize,
        focused: bool,
    ) -> ChecklistView<'a> {
        ChecklistView {
            habits,
            book,
            today,
            cursor,
            focused,
        }
    }
}

impl Widget for ChecklistView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Today's habits ");
        let inner = block.inner(area);
        block.render(area, buf);
        let mut lines = Vec::with_capacity(self.habits.len() + 2);
        let mut done_positive = 0u32;
        let mut done_negative = 0u32;
        for (i, habit) in self.habits.iter().enumerate() {
            let done = self.book.is_done(habit, self.today);
            let mut style = if done {
                match habit.polarity {
                    Polarity::Positive => {
                        done_positive += 1;
                        POSITIVE_STYLE
                    }
                    Polarity::Negative => {
                        done_negative += 1;
                        NEGATIVE_STYLE
                    }
                }
            } else {
                BASE_STYLE
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let mark = if done { "[x]" } else { "[ ]" };
            let label = if habit.icon.is_empty() {
                format!("{mark} {}", habit.name)
            } else {
                format!("{mark} {} {}", habit.icon, habit.name)
            };
            lines.push(Line::styled(label, style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{done_positive} good"), POSITIVE_STYLE),
            Span::styled(" / ", BASE_STYLE),
            Span::styled(format!("{done_negative} bad"), NEGATIVE_STYLE),
        ]));
        Paragraph::new(Text::from(lines)).render(inner, buf);
    }
}
