use serde::{Deserialize, Serialize};

use crate::core::BackgroundFillMode;
use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Packed color of the area fill when none is configured.
pub const DEFAULT_BACKGROUND_ARGB: u32 = 0xFF14_283C;

/// Host configuration for a `LineGraph`.
///
/// Serializable so hosts can persist graph setup; every field falls back to
/// its default when missing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_background_stroke_width")]
    pub background_stroke_width: f64,
    #[serde(default)]
    pub draw_background: bool,
    #[serde(default)]
    pub background_fill_mode: BackgroundFillMode,
    #[serde(default)]
    pub draw_markers: bool,
    #[serde(default = "default_marker_radius")]
    pub marker_radius_px: f64,
    /// Width of the vertical axis labels; popups are shifted right by it.
    #[serde(default)]
    pub popup_label_offset_px: f64,
    #[serde(default = "default_popup_hit_radius")]
    pub popup_hit_radius_px: f64,
    #[serde(default = "default_popup_precision")]
    pub popup_precision: u8,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            background_stroke_width: default_background_stroke_width(),
            draw_background: false,
            background_fill_mode: BackgroundFillMode::default(),
            draw_markers: false,
            marker_radius_px: default_marker_radius(),
            popup_label_offset_px: 0.0,
            popup_hit_radius_px: default_popup_hit_radius(),
            popup_precision: default_popup_precision(),
        }
    }
}

impl LineGraphConfig {
    #[must_use]
    pub fn with_background(mut self, draw_background: bool) -> Self {
        self.draw_background = draw_background;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_background_fill_mode(mut self, mode: BackgroundFillMode) -> Self {
        self.background_fill_mode = mode;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, draw_markers: bool) -> Self {
        self.draw_markers = draw_markers;
        self
    }

    #[must_use]
    pub fn with_popup_label_offset(mut self, offset_px: f64) -> Self {
        self.popup_label_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_popup_hit_radius(mut self, radius_px: f64) -> Self {
        self.popup_hit_radius_px = radius_px;
        self
    }

    pub fn validate(self) -> GraphResult<Self> {
        self.background_color.validate()?;
        for (value, name) in [
            (self.background_stroke_width, "background_stroke_width"),
            (self.marker_radius_px, "marker_radius_px"),
            (self.popup_hit_radius_px, "popup_hit_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "graph config `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.popup_label_offset_px.is_finite() {
            return Err(GraphError::InvalidData(
                "graph config `popup_label_offset_px` must be finite".to_owned(),
            ));
        }
        if self.popup_precision > 12 {
            return Err(GraphError::InvalidData(
                "graph config `popup_precision` must be <= 12".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize graph config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse graph config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_background_color() -> Color {
    Color::from_argb(DEFAULT_BACKGROUND_ARGB)
}

fn default_background_stroke_width() -> f64 {
    4.0
}

fn default_marker_radius() -> f64 {
    5.0
}

fn default_popup_hit_radius() -> f64 {
    30.0
}

fn default_popup_precision() -> u8 {
    2
}
