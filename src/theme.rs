//! Chart theme configuration.
//!
//! A [`Theme`] is an immutable value handed to each rendering call. There is
//! no process-wide current theme; changing the look means building a new
//! value.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Base look of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeBase {
    /// Grey panel with white grid lines
    #[default]
    Grey,
    /// White panel, light grid, no border
    Minimal,
    /// White panel, axis lines, no grid
    Classic,
    /// Dark panel for dark backgrounds
    Dark,
}

/// Where the legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Right,
    Left,
    Top,
    Bottom,
    /// Legend hidden
    None,
}

/// Default base font size in points.
pub const DEFAULT_BASE_SIZE: f32 = 11.0;

/// Immutable chart theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Base look
    #[serde(default)]
    pub base: ThemeBase,

    /// Base font size in points
    #[serde(default = "default_base_size")]
    pub base_size: f32,

    /// Font family; empty means the renderer's default
    #[serde(default)]
    pub font_family: String,

    /// Legend placement
    #[serde(default)]
    pub legend_position: LegendPosition,

    /// Render the title in bold
    #[serde(default)]
    pub title_bold: bool,
}

fn default_base_size() -> f32 {
    DEFAULT_BASE_SIZE
}

impl Default for Theme {
    fn default() -> Self {
        Self::grey()
    }
}

impl Theme {
    fn with_base(base: ThemeBase) -> Self {
        Self {
            base,
            base_size: DEFAULT_BASE_SIZE,
            font_family: String::new(),
            legend_position: LegendPosition::default(),
            title_bold: false,
        }
    }

    /// Create a grey theme.
    pub fn grey() -> Self {
        Self::with_base(ThemeBase::Grey)
    }

    /// Create a minimal theme.
    pub fn minimal() -> Self {
        Self::with_base(ThemeBase::Minimal)
    }

    /// Create a classic theme.
    pub fn classic() -> Self {
        Self::with_base(ThemeBase::Classic)
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::with_base(ThemeBase::Dark)
    }

    pub fn with_base_size(self, base_size: f32) -> Self {
        Self { base_size, ..self }
    }

    pub fn with_font_family(self, font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            ..self
        }
    }

    pub fn with_legend_position(self, legend_position: LegendPosition) -> Self {
        Self {
            legend_position,
            ..self
        }
    }

    pub fn with_title_bold(self, title_bold: bool) -> Self {
        Self { title_bold, ..self }
    }

    /// Whether legends are drawn at all.
    pub fn shows_legend(&self) -> bool {
        self.legend_position != LegendPosition::None
    }

    /// Get the plot background color for this theme.
    pub fn background_color(&self) -> Color {
        match self.base {
            ThemeBase::Dark => Color::new("#222222"),
            _ => Color::new("#FFFFFF"),
        }
    }

    /// Get the panel (plotting area) color for this theme.
    pub fn panel_color(&self) -> Color {
        match self.base {
            ThemeBase::Grey => Color::new("#EBEBEB"),
            ThemeBase::Minimal | ThemeBase::Classic => Color::new("#FFFFFF"),
            ThemeBase::Dark => Color::new("#333333"),
        }
    }

    /// Get the grid line color, or `None` when the theme draws no grid.
    pub fn grid_color(&self) -> Option<Color> {
        match self.base {
            ThemeBase::Grey => Some(Color::new("#FFFFFF")),
            ThemeBase::Minimal => Some(Color::new("#EBEBEB")),
            ThemeBase::Classic => None,
            ThemeBase::Dark => Some(Color::new("#4D4D4D")),
        }
    }

    /// Get the text color for this theme.
    pub fn text_color(&self) -> Color {
        match self.base {
            ThemeBase::Dark => Color::new("#E5E5E5"),
            _ => Color::new("#1A1A1A"),
        }
    }
}
