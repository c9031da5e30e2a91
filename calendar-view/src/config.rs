//! # Calendar Configuration
//!
//! Appearance and behavior settings for a calendar view, stored as YAML.
//!
//! ## YAML Format
//!
//! ```yaml
//! selection_mode:
//!   kind: sequence
//!   style: semicircle_edge
//! style: standard
//! hide_other_month: false
//! disable_past_date_selection: true
//! first_weekday: Mon
//! current_date_format: "%B %Y"
//! selected_style_color: "#FF3B30"
//! selected_text:
//!   change: "#FFFFFF"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use anyhow::Result;
use chrono::Weekday;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{palette, Color, SelectionMode, DAYS_PER_WEEK};
use std::fs;
use std::path::Path;

use crate::ui::components::calendar_renderer::{
    CalendarViewStyle, ContentPosition, LineView, SelectedTextState,
    DEFAULT_CIRCULAR_VIEW_DIAMETER, DEFAULT_DATE_FORMAT,
};

/// Settings of a calendar view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub selection_mode: SelectionMode,
    pub style: CalendarViewStyle,
    /// Blank out padding days and ignore taps on them
    pub hide_other_month: bool,
    /// Reject taps on days before today
    pub disable_past_date_selection: bool,
    /// Weekday shown in the first column
    pub first_weekday: Weekday,
    /// Header labels, first column first. Defaults follow `first_weekday`.
    pub week_labels: Option<[String; DAYS_PER_WEEK]>,
    /// strftime pattern for the month title
    pub current_date_format: String,
    pub selected_style_color: Color,
    pub selected_text: SelectedTextState,
    pub highlighted_text_color: Color,
    pub highlighted_background_color: Color,
    pub circular_view_diameter: f32,
    pub line_view: LineView,
    pub day_position: ContentPosition,
    pub week_position: ContentPosition,
    pub day_font_size: Option<f32>,
    pub week_font_size: Option<f32>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            style: CalendarViewStyle::Standard,
            hide_other_month: false,
            disable_past_date_selection: false,
            first_weekday: Weekday::Sun,
            week_labels: None,
            current_date_format: DEFAULT_DATE_FORMAT.to_string(),
            selected_style_color: palette::RED,
            selected_text: SelectedTextState::default(),
            highlighted_text_color: palette::BLACK,
            highlighted_background_color: Color::WHITE,
            circular_view_diameter: DEFAULT_CIRCULAR_VIEW_DIAMETER,
            line_view: LineView::default(),
            day_position: ContentPosition::Center,
            week_position: ContentPosition::Center,
            day_font_size: None,
            week_font_size: None,
        }
    }
}

/// Values a configuration file may not contain
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("Circular view diameter must be in (0, 1], got {0}")]
    CircularDiameterOutOfRange(f32),
    #[error("Line width rate must be in (0, 1], got {0}")]
    LineWidthRateOutOfRange(f32),
    #[error("Line height must be positive, got {0}")]
    NonPositiveLineHeight(f32),
    #[error("Font size must be positive, got {0}")]
    NonPositiveFontSize(f32),
}

impl CalendarConfig {
    /// Check ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let in_unit_range = |value: f32| value > 0.0 && value <= 1.0;

        if !in_unit_range(self.circular_view_diameter) {
            return Err(ConfigValidationError::CircularDiameterOutOfRange(
                self.circular_view_diameter,
            ));
        }
        if !in_unit_range(self.line_view.width_rate) {
            return Err(ConfigValidationError::LineWidthRateOutOfRange(
                self.line_view.width_rate,
            ));
        }
        if self.line_view.height <= 0.0 {
            return Err(ConfigValidationError::NonPositiveLineHeight(self.line_view.height));
        }
        for size in [self.day_font_size, self.week_font_size].into_iter().flatten() {
            if size <= 0.0 {
                return Err(ConfigValidationError::NonPositiveFontSize(size));
            }
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        let config: CalendarConfig = serde_yaml::from_str(yaml_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let yaml_content = fs::read_to_string(path)?;
            let config = Self::from_yaml(&yaml_content)?;
            debug!("Loaded calendar config from {:?}", path);
            Ok(config)
        } else {
            info!("No calendar config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created config directory: {:?}", parent);
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved calendar config to {:?}", path);
        Ok(())
    }
}
