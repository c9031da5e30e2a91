//! # Calendar State Module
//!
//! The `CalendarView` controller: a date model plus the settings that turn
//! it into per-cell appearance.
//!
//! ## Responsibilities:
//! - Month display and navigation, reporting the formatted month title
//! - Programmatic selection and highlighting
//! - Tap handling (see `calendar_renderer::interactions`)
//! - Cell appearance and render passes (see `calendar_renderer::rendering`)
//!
//! The controller is meant to live on the host's UI thread; it is not
//! synchronized for concurrent access.

use calendar_model::DateModel;
use chrono::{Local, NaiveDate};
use log::info;
use serde::Serialize;
use shared::{Color, GridIndex, Month, MonthType, SelectionMode, SelectionPreview};

use crate::config::CalendarConfig;

/// Why a tap did not reach the date model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Header cells are not selectable
    HeaderCell,
    /// The selection mode is `None`
    SelectionDisabled,
    /// Padding day while other-month days are hidden
    HiddenOtherMonth,
    /// Past day while past-date selection is disabled
    PastDate,
}

/// A committed tap, reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub index: GridIndex,
    #[serde(flatten)]
    pub selection: SelectionPreview,
}

/// Result of a tap on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TapOutcome {
    /// The tap was not a selection attempt
    Ignored { reason: IgnoreReason },
    /// The host predicate declined the selection; nothing changed
    Rejected { preview: SelectionPreview },
    /// The selection was committed
    Selected { event: SelectionEvent },
    /// Sequence mode: the tap re-picked the start of an open range and cleared it
    Cleared { index: GridIndex, date: NaiveDate },
}

/// Calendar controller owning the date model and its presentation settings
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub(crate) model: DateModel,
    pub(crate) config: CalendarConfig,
}

impl CalendarView {
    /// Create a view for the month containing `today`
    pub fn new(config: CalendarConfig, today: NaiveDate) -> Self {
        let mut model = DateModel::new(today)
            .with_first_weekday(config.first_weekday)
            .with_selection_kind(config.selection_mode.kind());
        if let Some(labels) = config.week_labels.clone() {
            model.set_weeks(labels);
        }
        Self { model, config }
    }

    /// Create a view anchored on the local current date
    pub fn with_config(config: CalendarConfig) -> Self {
        Self::new(config, Local::now().date_naive())
    }

    pub fn model(&self) -> &DateModel {
        &self.model
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.config.selection_mode
    }

    /// Change selection mode; the model keeps its selection state
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.selection_mode = mode;
        self.model.set_selection_kind(mode.kind());
    }

    /// Replace the header labels (first column first)
    pub fn set_weeks(&mut self, weeks: [String; shared::DAYS_PER_WEEK]) {
        self.config.week_labels = Some(weeks.clone());
        self.model.set_weeks(weeks);
    }

    // ---- Month display ----

    /// Show `month` and return its formatted title
    pub fn display(&mut self, month: Month) -> String {
        self.model.display(month);
        let title = self.current_title();
        info!("📅 Calendar now showing {}", title);
        title
    }

    /// Step to the previous or next month and return its formatted title
    pub fn display_relative(&mut self, month_type: MonthType) -> String {
        self.display(self.model.month().offset(month_type))
    }

    /// Format the displayed month with `format`
    pub fn current_date_string(&self, format: &str) -> String {
        self.model.date_string(format)
    }

    /// Format the displayed month with the configured pattern
    pub fn current_title(&self) -> String {
        self.current_date_string(&self.config.current_date_format)
    }

    // ---- Programmatic selection ----

    pub fn select(&mut self, date: NaiveDate, to_date: Option<NaiveDate>) -> &mut Self {
        self.model.select(date, to_date);
        self
    }

    pub fn select_dates(&mut self, dates: &[NaiveDate]) -> &mut Self {
        self.model.select_dates(dates);
        self
    }

    pub fn unselect(&mut self, date: NaiveDate, to_date: Option<NaiveDate>) -> &mut Self {
        self.model.unselect(date, to_date);
        self
    }

    pub fn unselect_dates(&mut self, dates: &[NaiveDate]) -> &mut Self {
        self.model.unselect_dates(dates);
        self
    }

    pub fn unselect_all(&mut self) -> &mut Self {
        self.model.unselect_all();
        self
    }

    // ---- Highlighting ----

    /// Highlight `date` (or a range) and paint highlighted days' text with `color`
    pub fn set_day_color(&mut self, color: Color, date: NaiveDate, to_date: Option<NaiveDate>) -> &mut Self {
        self.model.set_highlighted(date, to_date);
        self.config.highlighted_text_color = color;
        self
    }

    /// Highlight `date` (or a range) and paint highlighted days' background with `color`
    pub fn set_day_background_color(
        &mut self,
        color: Color,
        date: NaiveDate,
        to_date: Option<NaiveDate>,
    ) -> &mut Self {
        self.model.set_highlighted(date, to_date);
        self.config.highlighted_background_color = color;
        self
    }

    pub fn clear_highlighted(&mut self) -> &mut Self {
        self.model.clear_highlighted();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use shared::{palette, SequenceStyle, Style};

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_new_applies_config() {
        let config = CalendarConfig {
            selection_mode: SelectionMode::Multiple(Style::Line),
            first_weekday: Weekday::Mon,
            ..CalendarConfig::default()
        };
        let view = CalendarView::new(config, march(1));
        assert_eq!(view.model().selection_kind(), shared::SelectionKind::Multiple);
        assert_eq!(view.model().first_weekday(), Weekday::Mon);
        assert_eq!(view.model().week(0), "Mon");
    }

    #[test]
    fn test_custom_week_labels_from_config() {
        let config = CalendarConfig {
            week_labels: Some(["日", "月", "火", "水", "木", "金", "土"].map(String::from)),
            ..CalendarConfig::default()
        };
        let view = CalendarView::new(config, march(1));
        assert_eq!(view.model().week(6), "土");
    }

    #[test]
    fn test_display_returns_title() {
        let mut view = CalendarView::new(CalendarConfig::default(), march(1));
        assert_eq!(view.current_title(), "March 2024");
        assert_eq!(view.display_relative(MonthType::Next), "April 2024");
        assert_eq!(view.display(Month::new(2025, 1).unwrap()), "January 2025");
        assert_eq!(view.current_date_string("%-m/%Y"), "1/2025");
    }

    #[test]
    fn test_programmatic_selection_chains() {
        let mut view = CalendarView::new(CalendarConfig::default(), march(1));
        view.set_selection_mode(SelectionMode::Multiple(Style::Circle));
        view.select(march(1), None).select(march(2), None).unselect(march(1), None);
        assert_eq!(view.model().selected_dates(), vec![march(2)]);
        view.unselect_all();
        assert!(view.model().selected_dates().is_empty());
    }

    #[test]
    fn test_switching_mode_keeps_state() {
        let mut view = CalendarView::new(CalendarConfig::default(), march(1));
        view.set_selection_mode(SelectionMode::Sequence(SequenceStyle::Line));
        view.select(march(3), Some(march(5)));
        view.set_selection_mode(SelectionMode::Sequence(SequenceStyle::Circle));
        assert_eq!(view.model().selected_dates().len(), 3);
    }

    #[test]
    fn test_set_day_color_highlights() {
        let mut view = CalendarView::new(CalendarConfig::default(), march(1));
        view.set_day_color(palette::ORANGE, march(8), Some(march(9)))
            .set_day_background_color(palette::LIGHT_YELLOW, march(20), None);
        let position = view.model().position_of(march(9)).unwrap();
        assert!(view.model().is_highlighted(position));
        assert_eq!(view.config().highlighted_text_color, palette::ORANGE);
        assert_eq!(view.config().highlighted_background_color, palette::LIGHT_YELLOW);
    }
}
