use serde::{Deserialize, Serialize};
use shared::{palette, CalendarDayType, Color, SelectionMode, SequencePosition, SequenceStyle, Style, WeekdayKind};

use super::types::{CellStyle, SelectedTextState};

/// Default circle diameter as a fraction of the cell size
pub const DEFAULT_CIRCULAR_VIEW_DIAMETER: f32 = 0.75;

/// Default pattern for the month title
pub const DEFAULT_DATE_FORMAT: &str = "%B %Y";

/// Text colors for weekend columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayColors {
    pub saturday: Color,
    pub sunday: Color,
}

/// Full set of colors used to paint the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColorScheme {
    pub day_background: Color,
    pub week_background: Color,
    /// Week header text
    pub week: Color,
    /// Day text on ordinary weekdays
    pub weekday: Color,
    pub holiday: HolidayColors,
    pub other_month: Color,
    pub separator: Color,
    /// Day text for past days when past selection is disabled
    pub disable: Color,
}

/// Color scheme of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalendarViewStyle {
    #[default]
    Standard,
    Custom(CustomColorScheme),
}

impl CalendarViewStyle {
    /// Resolve the scheme to concrete colors
    pub fn colors(&self) -> CustomColorScheme {
        match self {
            CalendarViewStyle::Standard => CustomColorScheme {
                day_background: Color::WHITE,
                week_background: Color::WHITE,
                week: palette::BLACK,
                weekday: palette::BLACK,
                holiday: HolidayColors {
                    saturday: palette::BLUE,
                    sunday: palette::RED,
                },
                other_month: palette::LIGHT_GRAY,
                separator: palette::LIGHT_GRAY,
                disable: palette::DARK_GRAY,
            },
            CalendarViewStyle::Custom(colors) => *colors,
        }
    }
}

/// Text color of an unselected, unhighlighted day.
///
/// Padding days win over disabled past days, which win over weekend coloring.
pub fn base_text_color(
    colors: &CustomColorScheme,
    day_type: CalendarDayType,
    disabled_past: bool,
    weekday: WeekdayKind,
) -> Color {
    if day_type.is_other_month() {
        colors.other_month
    } else if disabled_past {
        colors.disable
    } else {
        match weekday {
            WeekdayKind::Sunday => colors.holiday.sunday,
            WeekdayKind::Saturday => colors.holiday.saturday,
            WeekdayKind::Weekday => colors.weekday,
        }
    }
}

/// Text color of a day once selection and highlighting are applied
pub fn day_text_color(
    base: Color,
    is_selected: bool,
    is_highlighted: bool,
    selected_text: SelectedTextState,
    highlighted_text: Color,
) -> Color {
    if is_selected {
        match selected_text {
            SelectedTextState::Change(color) => color,
            SelectedTextState::Keeping => base,
        }
    } else if is_highlighted {
        highlighted_text
    } else {
        base
    }
}

/// Selection shape for a day cell
pub fn cell_style(mode: SelectionMode, is_selected: bool, position: SequencePosition) -> CellStyle {
    if !is_selected {
        return CellStyle::Standard;
    }
    match mode {
        SelectionMode::None
        | SelectionMode::Single(Style::Background)
        | SelectionMode::Multiple(Style::Background)
        | SelectionMode::Sequence(SequenceStyle::Background) => CellStyle::Standard,
        SelectionMode::Single(Style::Circle)
        | SelectionMode::Multiple(Style::Circle)
        | SelectionMode::Sequence(SequenceStyle::Circle) => CellStyle::Circle,
        SelectionMode::Single(Style::Line) | SelectionMode::Multiple(Style::Line) => {
            CellStyle::Line(None)
        }
        SelectionMode::Sequence(SequenceStyle::Line) => CellStyle::Line(Some(position)),
        SelectionMode::Sequence(SequenceStyle::SemicircleEdge) => {
            CellStyle::SemicircleEdge(position)
        }
    }
}
