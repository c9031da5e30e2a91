//! Selection state for the calendar grid.
//!
//! `DateModel` owns the displayed month, the selected and highlighted dates
//! and the week header labels. Every per-cell query takes a day position
//! (0..42) on the grid laid out by [`MonthGrid`].

use chrono::{Datelike, Local, NaiveDate, Weekday};
use log::{debug, info};
use shared::{
    CalendarDayType, Month, MonthType, SelectionKind, SelectionPreview, SequencePosition,
    WeekdayKind, DAYS_PER_WEEK,
};
use std::collections::HashSet;

use super::calendar::{default_week_labels, format_month, MonthGrid};
use super::selection::{date_range, days_inclusive, SequenceDates};

/// Date model behind a calendar grid
#[derive(Debug, Clone)]
pub struct DateModel {
    grid: MonthGrid,
    today: NaiveDate,
    selection_kind: SelectionKind,
    /// Selection for single and multiple modes
    selected_dates: HashSet<NaiveDate>,
    /// Selection for sequence mode
    sequence_dates: SequenceDates,
    highlighted_dates: HashSet<NaiveDate>,
    weeks: [String; DAYS_PER_WEEK],
}

impl DateModel {
    /// Create a model showing the month that contains `today`, in single
    /// selection mode with Sunday as the first weekday
    pub fn new(today: NaiveDate) -> Self {
        Self {
            grid: MonthGrid::new(Month::containing(today), Weekday::Sun),
            today,
            selection_kind: SelectionKind::Single,
            selected_dates: HashSet::new(),
            sequence_dates: SequenceDates::default(),
            highlighted_dates: HashSet::new(),
            weeks: default_week_labels(Weekday::Sun),
        }
    }

    /// Put `first_weekday` in column 0. Resets the week labels to the
    /// defaults for that layout, so call [`set_weeks`](Self::set_weeks) afterwards.
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.grid = MonthGrid::new(self.grid.month(), first_weekday);
        self.weeks = default_week_labels(first_weekday);
        self
    }

    pub fn with_selection_kind(mut self, kind: SelectionKind) -> Self {
        self.selection_kind = kind;
        self
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn month(&self) -> Month {
        self.grid.month()
    }

    pub fn first_weekday(&self) -> Weekday {
        self.grid.first_weekday()
    }

    /// Reference date for past-date checks
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn selection_kind(&self) -> SelectionKind {
        self.selection_kind
    }

    /// Switch selection behavior. Existing selection state is kept.
    pub fn set_selection_kind(&mut self, kind: SelectionKind) {
        self.selection_kind = kind;
    }

    // ---- Month display ----

    /// Show `month`; selection state is untouched
    pub fn display(&mut self, month: Month) {
        self.grid = MonthGrid::new(month, self.grid.first_weekday());
        info!(
            "📅 Displaying {} (days {}..={} of the grid)",
            month,
            self.grid.index_at_beginning(),
            self.grid.index_at_end()
        );
    }

    /// Step to the previous or next month, or stay on the current one
    pub fn display_relative(&mut self, month_type: MonthType) {
        self.display(self.month().offset(month_type));
    }

    /// Format the displayed month with a strftime pattern
    pub fn date_string(&self, format: &str) -> String {
        format_month(&self.month(), format)
    }

    // ---- Grid queries ----

    pub fn date_at(&self, position: usize) -> NaiveDate {
        self.grid.date_at(position)
    }

    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.grid.position_of(date)
    }

    pub fn index_at_beginning(&self) -> usize {
        self.grid.index_at_beginning()
    }

    pub fn index_at_end(&self) -> usize {
        self.grid.index_at_end()
    }

    pub fn day_type(&self, position: usize) -> CalendarDayType {
        self.grid.day_type(position)
    }

    pub fn is_other_month(&self, position: usize) -> bool {
        self.day_type(position).is_other_month()
    }

    /// Day-of-month text for a cell; padding cells are blank when hidden
    pub fn day_string(&self, position: usize, hide_other_month: bool) -> String {
        if hide_other_month && self.is_other_month(position) {
            String::new()
        } else {
            self.date_at(position).day().to_string()
        }
    }

    pub fn is_past(&self, position: usize) -> bool {
        self.date_at(position) < self.today
    }

    pub fn weekday_kind(&self, column: usize) -> WeekdayKind {
        self.grid.weekday_kind(column)
    }

    /// Header label for `column` (0..7)
    pub fn week(&self, column: usize) -> &str {
        assert!(column < DAYS_PER_WEEK, "week column {column} is outside the header row");
        &self.weeks[column]
    }

    pub fn weeks(&self) -> &[String; DAYS_PER_WEEK] {
        &self.weeks
    }

    /// Replace the header labels; index 0 is the first column
    pub fn set_weeks(&mut self, weeks: [String; DAYS_PER_WEEK]) {
        self.weeks = weeks;
    }

    // ---- Selection ----

    /// Select `date`, or the range `[date, to_date]`, according to the selection mode.
    ///
    /// - none: nothing happens
    /// - single: the selection becomes exactly `date`
    /// - multiple: each date in the range is toggled in or out
    /// - sequence: with `to_date` the range is set at once; otherwise the first
    ///   call opens a range, the second closes it (normalized), picking the
    ///   open start again clears it, and a call on a closed range opens a new one
    pub fn select(&mut self, date: NaiveDate, to_date: Option<NaiveDate>) {
        match self.selection_kind {
            SelectionKind::None => {}
            SelectionKind::Single => {
                self.selected_dates.clear();
                self.selected_dates.insert(date);
            }
            SelectionKind::Multiple => {
                for day in date_range(date, to_date.unwrap_or(date)) {
                    if !self.selected_dates.remove(&day) {
                        self.selected_dates.insert(day);
                    }
                }
            }
            SelectionKind::Sequence => {
                self.sequence_dates = match to_date {
                    Some(to_date) => SequenceDates::closed(date, to_date),
                    None => self.next_sequence(date),
                };
            }
        }
        debug!("📅 Selected {} (to {:?}) in {:?} mode", date, to_date, self.selection_kind);
    }

    fn next_sequence(&self, date: NaiveDate) -> SequenceDates {
        match (self.sequence_dates.start(), self.sequence_dates.end()) {
            (Some(start), None) if start == date => SequenceDates::default(),
            (Some(start), None) => SequenceDates::closed(start, date),
            _ => SequenceDates::open(date),
        }
    }

    pub fn select_dates(&mut self, dates: &[NaiveDate]) {
        for date in dates {
            self.select(*date, None);
        }
    }

    /// What tapping the cell at `position` would select, without committing it
    pub fn preview(&self, position: usize) -> SelectionPreview {
        let date = self.date_at(position);
        match (self.selection_kind, self.sequence_dates.start(), self.sequence_dates.end()) {
            (SelectionKind::Sequence, Some(start), None) if start != date => {
                let range = SequenceDates::closed(start, date);
                SelectionPreview {
                    date: range.start().unwrap_or(date),
                    to_date: range.end(),
                    length: days_inclusive(start, date),
                }
            }
            _ => SelectionPreview {
                date,
                to_date: None,
                length: 1,
            },
        }
    }

    /// Whether tapping the cell at `position` would clear the sequence range
    /// instead of selecting (re-picking the start of an open range)
    pub fn tap_clears(&self, position: usize) -> bool {
        self.selection_kind == SelectionKind::Sequence
            && self.sequence_dates.is_open()
            && self.sequence_dates.start() == Some(self.date_at(position))
    }

    /// Commit a tap on the cell at `position`, returning what was selected
    pub fn select_at(&mut self, position: usize) -> SelectionPreview {
        let preview = self.preview(position);
        self.select(self.date_at(position), None);
        preview
    }

    /// Inverse of [`select`](Self::select).
    ///
    /// Single and multiple modes drop the date (or range) from the selection.
    /// Sequence mode clears the whole range when the given dates touch it.
    pub fn unselect(&mut self, date: NaiveDate, to_date: Option<NaiveDate>) {
        let to_date = to_date.unwrap_or(date);
        match self.selection_kind {
            SelectionKind::None => {}
            SelectionKind::Single | SelectionKind::Multiple => {
                for day in date_range(date, to_date) {
                    self.selected_dates.remove(&day);
                }
            }
            SelectionKind::Sequence => {
                if self.sequence_dates.overlaps(date, to_date) {
                    self.sequence_dates = SequenceDates::default();
                }
            }
        }
        debug!("📅 Unselected {} (to {})", date, to_date);
    }

    pub fn unselect_dates(&mut self, dates: &[NaiveDate]) {
        for date in dates {
            self.unselect(*date, None);
        }
    }

    /// Clear every selection, whatever the mode
    pub fn unselect_all(&mut self) {
        self.selected_dates.clear();
        self.sequence_dates = SequenceDates::default();
        debug!("📅 Cleared selection");
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.is_date_selected(self.date_at(position))
    }

    pub fn is_date_selected(&self, date: NaiveDate) -> bool {
        match self.selection_kind {
            SelectionKind::Sequence => self.sequence_dates.contains(date),
            _ => self.selected_dates.contains(&date),
        }
    }

    /// Sorted snapshot of the dates selected in the current mode
    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        match self.selection_kind {
            SelectionKind::Sequence => self.sequence_dates.dates(),
            _ => {
                let mut dates: Vec<_> = self.selected_dates.iter().copied().collect();
                dates.sort();
                dates
            }
        }
    }

    pub fn sequence_dates(&self) -> SequenceDates {
        self.sequence_dates
    }

    /// Where the cell at `position` sits inside the sequence range
    pub fn sequence_position(&self, position: usize) -> SequencePosition {
        self.sequence_dates.position(self.date_at(position))
    }

    // ---- Highlighting ----

    /// Mark `date` (or `[date, to_date]`) for custom coloring
    pub fn set_highlighted(&mut self, date: NaiveDate, to_date: Option<NaiveDate>) {
        self.highlighted_dates
            .extend(date_range(date, to_date.unwrap_or(date)));
    }

    pub fn clear_highlighted(&mut self) {
        self.highlighted_dates.clear();
    }

    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted_dates.contains(&self.date_at(position))
    }
}

impl Default for DateModel {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
