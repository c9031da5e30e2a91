use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod color;

pub use color::{palette, Color};

/// Number of columns in the grid (one per weekday)
pub const DAYS_PER_WEEK: usize = 7;

/// Number of week rows in the day section of the grid
pub const GRID_ROWS: usize = 6;

/// Total number of day cells in the grid (6 rows x 7 columns)
pub const DAY_CELL_COUNT: usize = DAYS_PER_WEEK * GRID_ROWS;

/// Errors produced when building calendar values from untrusted input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {year}-{month}. Month must be between 1 and 12 and the year representable")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Invalid month string '{0}', expected YYYY-MM")]
    InvalidMonthFormat(String),
    #[error("Invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Represents a calendar month (year + month), always valid once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonth", into = "RawMonth")]
pub struct Month {
    first: NaiveDate,
}

/// Serialized form of a month
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonth> for Month {
    type Error = CalendarError;

    fn try_from(raw: RawMonth) -> Result<Self, Self::Error> {
        Month::new(raw.year, raw.month)
    }
}

impl From<Month> for RawMonth {
    fn from(month: Month) -> Self {
        RawMonth {
            year: month.year(),
            month: month.month(),
        }
    }
}

impl Month {
    /// Create a month, rejecting month numbers outside 1..=12 and months whose
    /// grid would reach past the representable calendar
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|first| grid_window_fits(*first))
            .map(|first| Self { first })
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    /// The month a date falls in. Dates in the first or last month of the
    /// representable calendar map to the nearest month that can be laid out.
    pub fn containing(date: NaiveDate) -> Self {
        let mut first = date.with_day(1).unwrap_or(date);
        while !grid_window_fits(first) {
            let stepped = if first.year() < 0 {
                first.checked_add_months(Months::new(1))
            } else {
                first.checked_sub_months(Months::new(1))
            };
            match stepped {
                Some(stepped) => first = stepped,
                None => break,
            }
        }
        Self { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number (1-12)
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(i64::from(self.day_count()) - 1)
    }

    /// Get the number of days in this month
    pub fn day_count(&self) -> u32 {
        match self.month() {
            2 => {
                if is_leap_year(self.year()) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first of the month
    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The month before this one. Stays put at the start of the representable calendar.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .and_then(|first| Self::new(first.year(), first.month()).ok())
            .unwrap_or(*self)
    }

    /// The month after this one. Stays put at the end of the representable calendar.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|first| Self::new(first.year(), first.month()).ok())
            .unwrap_or(*self)
    }

    /// Step relative to this month
    pub fn offset(&self, month_type: MonthType) -> Self {
        match month_type {
            MonthType::Previous => self.previous(),
            MonthType::Current => *self,
            MonthType::Next => self.next(),
        }
    }

    /// Get the human-readable name for this month
    pub fn name(&self) -> &'static str {
        match self.month() {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", _ => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthFormat(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Month::new(year, month)
    }
}

/// Whether every date of a grid starting on `first`'s week fits in `NaiveDate`.
///
/// The grid reaches up to 6 days before the 1st and 41 days after it.
fn grid_window_fits(first: NaiveDate) -> bool {
    let before = Duration::days((DAYS_PER_WEEK - 1) as i64);
    let after = Duration::days((DAY_CELL_COUNT - 1) as i64);
    first.checked_sub_signed(before).is_some() && first.checked_add_signed(after).is_some()
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Relative month navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthType {
    Previous,
    Current,
    Next,
}

/// Identifies one cell of the grid: a week header cell or a day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridIndex {
    /// Week header cell, column 0..7
    Header(usize),
    /// Day cell, linear position 0..42
    Day(usize),
}

impl GridIndex {
    /// Build a day index from row and column
    pub fn day(row: usize, column: usize) -> Self {
        GridIndex::Day(row * DAYS_PER_WEEK + column)
    }

    /// Column 0..7 this cell sits in
    pub fn column(&self) -> usize {
        match *self {
            GridIndex::Header(column) => column,
            GridIndex::Day(position) => position % DAYS_PER_WEEK,
        }
    }

    /// Row of a day cell; header cells have no row
    pub fn row(&self) -> Option<usize> {
        match *self {
            GridIndex::Header(_) => None,
            GridIndex::Day(position) => Some(position / DAYS_PER_WEEK),
        }
    }
}

/// Visual sub-style for single and multiple selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Background,
    Circle,
    Line,
}

/// Visual sub-style for sequence selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceStyle {
    Background,
    Circle,
    Line,
    SemicircleEdge,
}

/// How taps select dates, with the visual style used to draw the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "style", rename_all = "snake_case")]
pub enum SelectionMode {
    None,
    Single(Style),
    Multiple(Style),
    Sequence(SequenceStyle),
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::Single(Style::Circle)
    }
}

impl SelectionMode {
    /// The selection behavior, without the visual style
    pub fn kind(&self) -> SelectionKind {
        match self {
            SelectionMode::None => SelectionKind::None,
            SelectionMode::Single(_) => SelectionKind::Single,
            SelectionMode::Multiple(_) => SelectionKind::Multiple,
            SelectionMode::Sequence(_) => SelectionKind::Sequence,
        }
    }
}

/// Selection behavior as seen by the date model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    None,
    Single,
    Multiple,
    Sequence,
}

/// Type of calendar day cell relative to the displayed month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Padding day from the previous month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Padding day from the next month
    PaddingAfter,
}

impl CalendarDayType {
    pub fn is_other_month(&self) -> bool {
        !matches!(self, CalendarDayType::MonthDay)
    }
}

/// Weekday classification used for holiday coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayKind {
    Weekday,
    Saturday,
    Sunday,
}

impl From<Weekday> for WeekdayKind {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => WeekdayKind::Saturday,
            Weekday::Sun => WeekdayKind::Sunday,
            _ => WeekdayKind::Weekday,
        }
    }
}

/// Where a selected cell sits inside a sequence range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePosition {
    Left,
    Middle,
    Right,
}

/// What a tap would select, handed to the host before the selection is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPreview {
    /// First date of the selection
    pub date: NaiveDate,
    /// End date when the tap closes a sequence range
    pub to_date: Option<NaiveDate>,
    /// Number of days in the selected period (inclusive)
    pub length: u32,
}
