//! Calendar grid layout for a displayed month.
//!
//! This module contains the date arithmetic that maps a month onto a fixed
//! grid of 42 day cells (6 weeks x 7 days), including the padding days taken
//! from the neighboring months, and the formatting of the month title.

use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, NaiveDate, Weekday};
use log::warn;
use shared::{CalendarDayType, Month, WeekdayKind, DAYS_PER_WEEK, DAY_CELL_COUNT};
use std::fmt::Write;

/// Pattern used when a caller-supplied date format cannot be rendered
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m";

/// Layout of one month on the 42-cell day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    month: Month,
    first_weekday: Weekday,
    leading_padding: usize,
}

impl MonthGrid {
    /// Lay out `month` with `first_weekday` in column 0
    pub fn new(month: Month, first_weekday: Weekday) -> Self {
        let leading_padding = weekday_column(month.first_weekday(), first_weekday);
        Self {
            month,
            first_weekday,
            leading_padding,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Number of padding cells before the 1st of the month
    pub fn leading_padding(&self) -> usize {
        self.leading_padding
    }

    /// Date shown in the top-left day cell
    pub fn grid_start(&self) -> NaiveDate {
        self.month.first_day() - Duration::days(self.leading_padding as i64)
    }

    /// Date represented by the day cell at `position` (0..42)
    pub fn date_at(&self, position: usize) -> NaiveDate {
        assert_day_position(position);
        self.grid_start() + Duration::days(position as i64)
    }

    /// Position of `date` on the grid, if the grid shows it
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.grid_start()).num_days();
        usize::try_from(offset)
            .ok()
            .filter(|position| *position < DAY_CELL_COUNT)
    }

    /// First grid position inside the displayed month
    pub fn index_at_beginning(&self) -> usize {
        self.leading_padding
    }

    /// Last grid position inside the displayed month
    pub fn index_at_end(&self) -> usize {
        self.leading_padding + self.month.day_count() as usize - 1
    }

    /// Classify the cell at `position` relative to the displayed month
    pub fn day_type(&self, position: usize) -> CalendarDayType {
        assert_day_position(position);
        if position < self.index_at_beginning() {
            CalendarDayType::PaddingBefore
        } else if position > self.index_at_end() {
            CalendarDayType::PaddingAfter
        } else {
            CalendarDayType::MonthDay
        }
    }

    /// Weekday shown in `column` (0..7)
    pub fn weekday_at(&self, column: usize) -> Weekday {
        assert_column(column);
        (0..column).fold(self.first_weekday, |weekday, _| weekday.succ())
    }

    /// Holiday classification of `column`
    pub fn weekday_kind(&self, column: usize) -> WeekdayKind {
        WeekdayKind::from(self.weekday_at(column))
    }
}

/// Column a weekday lands in when the week starts on `first_weekday`
fn weekday_column(weekday: Weekday, first_weekday: Weekday) -> usize {
    let days = weekday.num_days_from_sunday() + 7 - first_weekday.num_days_from_sunday();
    (days % 7) as usize
}

fn assert_day_position(position: usize) {
    assert!(
        position < DAY_CELL_COUNT,
        "day position {position} is outside the {DAY_CELL_COUNT}-cell grid"
    );
}

fn assert_column(column: usize) {
    assert!(
        column < DAYS_PER_WEEK,
        "column {column} is outside the {DAYS_PER_WEEK}-column grid"
    );
}

/// English short weekday labels, rotated so index 0 is `first_weekday`
pub fn default_week_labels(first_weekday: Weekday) -> [String; DAYS_PER_WEEK] {
    let mut weekday = first_weekday;
    std::array::from_fn(|_| {
        let label = short_weekday_name(weekday).to_string();
        weekday = weekday.succ();
        label
    })
}

fn short_weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Format a month for display using a strftime pattern.
///
/// Malformed patterns, or patterns asking for fields a date does not have
/// (hours, time zones), fall back to `YYYY-MM`.
pub fn format_month(month: &Month, pattern: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!("Invalid date format '{}', falling back to {}", pattern, FALLBACK_DATE_FORMAT);
        return month.to_string();
    }

    let mut formatted = String::new();
    if write!(formatted, "{}", month.first_day().format_with_items(items.iter())).is_err() {
        warn!("Date format '{}' cannot render a date, falling back to {}", pattern, FALLBACK_DATE_FORMAT);
        return month.to_string();
    }
    formatted
}
