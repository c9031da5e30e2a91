//! Presentation layer for the calendar grid.
//!
//! Maps the date model onto per-cell appearance (text, colors, selection
//! shape), forwards taps into the model, and hands every cell to a
//! [`CellRenderer`] so the model never depends on a concrete UI toolkit.

pub mod config;
pub mod ui;

pub use config::{CalendarConfig, ConfigValidationError};
pub use ui::components::calendar_renderer::{
    CalendarViewStyle, CellAppearance, CellRenderer, CellStyle, ContentPosition,
    CustomColorScheme, HolidayColors, LinePosition, LineView, NoOverrides, SelectedTextState,
    SelectionColors, TextGridRenderer,
};
pub use ui::state::calendar_state::{CalendarView, IgnoreReason, SelectionEvent, TapOutcome};
