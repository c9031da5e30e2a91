use chrono::NaiveDate;
use shared::{Color, GridIndex, DAYS_PER_WEEK, DAY_CELL_COUNT, GRID_ROWS};
use std::fmt;

use super::styling::{base_text_color, cell_style, day_text_color};
use super::types::{CellAppearance, CellStyle};
use crate::ui::state::calendar_state::CalendarView;

/// Draws cells. Implemented by whatever UI toolkit hosts the calendar.
pub trait CellRenderer {
    /// Configure the cell at `index` with its appearance
    fn configure(&mut self, index: GridIndex, appearance: &CellAppearance);
}

/// Per-cell overrides of the selection colors, asked only for selected cells
pub trait SelectionColors {
    /// Color of the selection shape, or `None` for the configured default
    fn selection_color(&self, _index: GridIndex, _date: NaiveDate) -> Option<Color> {
        None
    }

    /// Text color of a selected day, or `None` for the configured default
    fn selection_text_color(&self, _index: GridIndex, _date: NaiveDate) -> Option<Color> {
        None
    }
}

/// Keeps the configured selection colors everywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl SelectionColors for NoOverrides {}

impl CalendarView {
    /// Appearance of one cell
    pub fn appearance(&self, index: GridIndex, overrides: &dyn SelectionColors) -> CellAppearance {
        let colors = self.config.style.colors();
        match index {
            GridIndex::Header(column) => CellAppearance {
                content: self.model.week(column).to_string(),
                text_color: colors.week,
                background_color: colors.week_background,
                selection_color: self.config.selected_style_color,
                style: CellStyle::Standard,
                is_selected: false,
                is_highlighted: false,
                is_other_month: false,
                position: self.config.week_position,
                font_size: self.config.week_font_size,
                line_view: None,
                circular_diameter: self.config.circular_view_diameter,
            },
            GridIndex::Day(position) => {
                let date = self.model.date_at(position);
                let is_selected = self.model.is_selected(position);
                let is_highlighted = self.model.is_highlighted(position);

                let base = base_text_color(
                    &colors,
                    self.model.day_type(position),
                    self.config.disable_past_date_selection && self.model.is_past(position),
                    self.model.weekday_kind(index.column()),
                );
                let mut text_color = day_text_color(
                    base,
                    is_selected,
                    is_highlighted,
                    self.config.selected_text,
                    self.config.highlighted_text_color,
                );
                let mut selection_color = self.config.selected_style_color;
                if is_selected {
                    text_color = overrides.selection_text_color(index, date).unwrap_or(text_color);
                    selection_color = overrides.selection_color(index, date).unwrap_or(selection_color);
                }

                let style = cell_style(
                    self.config.selection_mode,
                    is_selected,
                    self.model.sequence_position(position),
                );

                CellAppearance {
                    content: self.model.day_string(position, self.config.hide_other_month),
                    text_color,
                    background_color: if is_highlighted {
                        self.config.highlighted_background_color
                    } else {
                        colors.day_background
                    },
                    selection_color,
                    style,
                    is_selected,
                    is_highlighted,
                    is_other_month: self.model.is_other_month(position),
                    position: self.config.day_position,
                    font_size: self.config.day_font_size,
                    line_view: style.is_line().then_some(self.config.line_view),
                    circular_diameter: self.config.circular_view_diameter,
                }
            }
        }
    }

    /// Hand every cell to `renderer`: the 7 header cells, then the 42 day cells
    pub fn render<R: CellRenderer>(&self, renderer: &mut R, overrides: &dyn SelectionColors) {
        for column in 0..DAYS_PER_WEEK {
            let index = GridIndex::Header(column);
            renderer.configure(index, &self.appearance(index, overrides));
        }
        for position in 0..DAY_CELL_COUNT {
            let index = GridIndex::Day(position);
            renderer.configure(index, &self.appearance(index, overrides));
        }
    }
}

/// Width of one cell in the text grid
const TEXT_CELL_WIDTH: usize = 5;

/// Renders the grid as plain text, one line per row.
///
/// Selected days are bracketed (`[10]`), days of other months are wrapped in
/// parentheses (`(25)`) and highlighted days get a trailing `*`.
#[derive(Debug, Clone)]
pub struct TextGridRenderer {
    header: Vec<String>,
    days: Vec<String>,
}

impl TextGridRenderer {
    pub fn new() -> Self {
        Self {
            header: vec![String::new(); DAYS_PER_WEEK],
            days: vec![String::new(); DAY_CELL_COUNT],
        }
    }

    /// Text drawn for the cell at `index`
    pub fn cell(&self, index: GridIndex) -> &str {
        match index {
            GridIndex::Header(column) => &self.header[column],
            GridIndex::Day(position) => &self.days[position],
        }
    }
}

impl Default for TextGridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRenderer for TextGridRenderer {
    fn configure(&mut self, index: GridIndex, appearance: &CellAppearance) {
        match index {
            GridIndex::Header(column) => {
                self.header[column] = appearance.content.chars().take(3).collect();
            }
            GridIndex::Day(position) => {
                let content = &appearance.content;
                let mut text = if content.is_empty() {
                    String::new()
                } else if appearance.is_selected {
                    format!("[{content}]")
                } else if appearance.is_other_month {
                    format!("({content})")
                } else {
                    content.clone()
                };
                if appearance.is_highlighted && !content.is_empty() {
                    text.push('*');
                }
                self.days[position] = text;
            }
        }
    }
}

impl fmt::Display for TextGridRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self
            .header
            .iter()
            .map(|label| format!("{:>width$}", label, width = TEXT_CELL_WIDTH))
            .collect();
        writeln!(f, "{}", header.join(""))?;
        for row in 0..GRID_ROWS {
            let cells: Vec<_> = (0..DAYS_PER_WEEK)
                .map(|column| {
                    format!("{:>width$}", self.days[row * DAYS_PER_WEEK + column], width = TEXT_CELL_WIDTH)
                })
                .collect();
            writeln!(f, "{}", cells.join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;
    use shared::{palette, SelectionMode, SequencePosition, SequenceStyle, Style};

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn view(config: CalendarConfig) -> CalendarView {
        CalendarView::new(config, march(1))
    }

    /// Collects every configured cell, in call order
    #[derive(Default)]
    struct RecordingRenderer {
        cells: Vec<(GridIndex, CellAppearance)>,
    }

    impl CellRenderer for RecordingRenderer {
        fn configure(&mut self, index: GridIndex, appearance: &CellAppearance) {
            self.cells.push((index, appearance.clone()));
        }
    }

    struct GreenSelection;

    impl SelectionColors for GreenSelection {
        fn selection_color(&self, _index: GridIndex, date: NaiveDate) -> Option<Color> {
            (date == march(10)).then_some(palette::GREEN)
        }

        fn selection_text_color(&self, _index: GridIndex, _date: NaiveDate) -> Option<Color> {
            Some(Color::WHITE)
        }
    }

    #[test]
    fn test_render_visits_header_then_days() {
        let view = view(CalendarConfig::default());
        let mut renderer = RecordingRenderer::default();
        view.render(&mut renderer, &NoOverrides);
        assert_eq!(renderer.cells.len(), DAYS_PER_WEEK + DAY_CELL_COUNT);
        assert_eq!(renderer.cells[0].0, GridIndex::Header(0));
        assert_eq!(renderer.cells[0].1.content, "Sun");
        assert_eq!(renderer.cells[7].0, GridIndex::Day(0));
    }

    #[test]
    fn test_header_appearance() {
        let config = CalendarConfig {
            week_font_size: Some(11.0),
            ..CalendarConfig::default()
        };
        let appearance = view(config).appearance(GridIndex::Header(6), &NoOverrides);
        assert_eq!(appearance.content, "Sat");
        assert_eq!(appearance.text_color, palette::BLACK);
        assert_eq!(appearance.style, CellStyle::Standard);
        assert_eq!(appearance.font_size, Some(11.0));
        assert!(!appearance.is_selected);
    }

    #[test]
    fn test_day_text_colors() {
        let view = view(CalendarConfig::default());
        // Position 0 is Feb 25th, a padding day
        assert_eq!(view.appearance(GridIndex::Day(0), &NoOverrides).text_color, palette::LIGHT_GRAY);
        // March 3rd is a Sunday, March 9th a Saturday, March 5th a Tuesday
        assert_eq!(view.appearance(GridIndex::Day(7), &NoOverrides).text_color, palette::RED);
        assert_eq!(view.appearance(GridIndex::Day(13), &NoOverrides).text_color, palette::BLUE);
        assert_eq!(view.appearance(GridIndex::Day(9), &NoOverrides).text_color, palette::BLACK);
    }

    #[test]
    fn test_disabled_past_days_are_dimmed() {
        let config = CalendarConfig {
            disable_past_date_selection: true,
            ..CalendarConfig::default()
        };
        let mut view = CalendarView::new(config, march(10));
        view.display(shared::Month::new(2024, 3).unwrap());
        assert_eq!(view.appearance(GridIndex::Day(13), &NoOverrides).text_color, palette::DARK_GRAY);
        assert_eq!(view.appearance(GridIndex::Day(15), &NoOverrides).text_color, palette::BLACK);
    }

    #[test]
    fn test_selected_day_appearance() {
        let mut view = view(CalendarConfig::default());
        view.select(march(10), None);
        let appearance = view.appearance(GridIndex::Day(14), &NoOverrides);
        assert!(appearance.is_selected);
        assert_eq!(appearance.style, CellStyle::Circle);
        assert_eq!(appearance.text_color, Color::BLACK);
        assert_eq!(appearance.selection_color, palette::RED);
        assert_eq!(appearance.content, "10");
    }

    #[test]
    fn test_selection_color_overrides() {
        let mut view = view(CalendarConfig::default());
        view.select(march(10), None);
        let appearance = view.appearance(GridIndex::Day(14), &GreenSelection);
        assert_eq!(appearance.selection_color, palette::GREEN);
        assert_eq!(appearance.text_color, Color::WHITE);
        // Unselected cells never ask for overrides
        let other = view.appearance(GridIndex::Day(15), &GreenSelection);
        assert_eq!(other.text_color, palette::BLACK);
    }

    #[test]
    fn test_sequence_styles() {
        let config = CalendarConfig {
            selection_mode: SelectionMode::Sequence(SequenceStyle::Line),
            ..CalendarConfig::default()
        };
        let mut view = view(config);
        view.select(march(3), Some(march(5)));
        let left = view.appearance(GridIndex::Day(7), &NoOverrides);
        assert_eq!(left.style, CellStyle::Line(Some(SequencePosition::Left)));
        assert!(left.line_view.is_some());
        let right = view.appearance(GridIndex::Day(9), &NoOverrides);
        assert_eq!(right.style, CellStyle::Line(Some(SequencePosition::Right)));

        view.set_selection_mode(SelectionMode::Sequence(SequenceStyle::SemicircleEdge));
        let middle = view.appearance(GridIndex::Day(8), &NoOverrides);
        assert_eq!(middle.style, CellStyle::SemicircleEdge(SequencePosition::Middle));
        assert!(middle.line_view.is_none());
    }

    #[test]
    fn test_highlighted_day_colors() {
        let mut view = view(CalendarConfig::default());
        view.set_day_color(palette::ORANGE, march(4), None)
            .set_day_background_color(palette::LIGHT_PINK, march(4), None);
        let appearance = view.appearance(GridIndex::Day(8), &NoOverrides);
        assert!(appearance.is_highlighted);
        assert_eq!(appearance.text_color, palette::ORANGE);
        assert_eq!(appearance.background_color, palette::LIGHT_PINK);

        view.set_selection_mode(SelectionMode::Single(Style::Background));
        view.select(march(4), None);
        let selected = view.appearance(GridIndex::Day(8), &NoOverrides);
        assert_eq!(selected.text_color, Color::BLACK);
        assert_eq!(selected.style, CellStyle::Standard);
    }

    #[test]
    fn test_text_grid_renderer() {
        let mut view = view(CalendarConfig::default());
        view.select(march(10), None);
        view.set_day_color(palette::ORANGE, march(12), None);
        let mut renderer = TextGridRenderer::new();
        view.render(&mut renderer, &NoOverrides);

        assert_eq!(renderer.cell(GridIndex::Header(0)), "Sun");
        assert_eq!(renderer.cell(GridIndex::Day(0)), "(25)");
        assert_eq!(renderer.cell(GridIndex::Day(5)), "1");
        assert_eq!(renderer.cell(GridIndex::Day(14)), "[10]");
        assert_eq!(renderer.cell(GridIndex::Day(16)), "12*");

        let text = renderer.to_string();
        assert_eq!(text.lines().count(), 1 + shared::GRID_ROWS);
        assert!(text.lines().next().unwrap().starts_with("  Sun"));
    }

    #[test]
    fn test_text_grid_hides_other_month() {
        let config = CalendarConfig {
            hide_other_month: true,
            ..CalendarConfig::default()
        };
        let mut renderer = TextGridRenderer::new();
        view(config).render(&mut renderer, &NoOverrides);
        assert_eq!(renderer.cell(GridIndex::Day(0)), "");
        assert_eq!(renderer.cell(GridIndex::Day(41)), "");
    }
}
