use serde::{Deserialize, Serialize};
use shared::{Color, SequencePosition};

/// Shape drawn behind a cell to show it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    /// No shape; selection is shown by colors only
    Standard,
    /// A filled circle behind the day number
    Circle,
    /// A line through the cell. Carries the range position in sequence mode.
    Line(Option<SequencePosition>),
    /// A capsule spanning the range, rounded at the endpoints
    SemicircleEdge(SequencePosition),
}

impl CellStyle {
    pub fn is_line(&self) -> bool {
        matches!(self, CellStyle::Line(_))
    }
}

/// Where the text sits inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentPosition {
    TopLeft,
    TopCenter,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Offset in points from the cell's top-left corner
    Custom { x: f32, y: f32 },
}

/// Vertical placement of the selection line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinePosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Geometry of the line used by [`CellStyle::Line`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineView {
    /// Line thickness in points
    pub height: f32,
    /// Fraction of the cell width covered by the line (0..=1)
    pub width_rate: f32,
    pub position: LinePosition,
}

impl Default for LineView {
    fn default() -> Self {
        Self {
            height: 1.0,
            width_rate: 1.0,
            position: LinePosition::Center,
        }
    }
}

/// Text color of selected days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectedTextState {
    /// Use this color for selected days
    Change(Color),
    /// Keep the color the day would have unselected
    Keeping,
}

impl Default for SelectedTextState {
    fn default() -> Self {
        SelectedTextState::Change(Color::BLACK)
    }
}

/// Everything a renderer needs to draw one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellAppearance {
    /// Text shown in the cell (day number or week label)
    pub content: String,
    pub text_color: Color,
    pub background_color: Color,
    /// Color of the selection shape
    pub selection_color: Color,
    pub style: CellStyle,
    pub is_selected: bool,
    pub is_highlighted: bool,
    /// Padding day from a neighboring month
    pub is_other_month: bool,
    pub position: ContentPosition,
    /// Font size override in points; `None` keeps the renderer's default
    pub font_size: Option<f32>,
    /// Line geometry, present only for [`CellStyle::Line`]
    pub line_view: Option<LineView>,
    /// Circle diameter as a fraction of the cell size
    pub circular_diameter: f32,
}
