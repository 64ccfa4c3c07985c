use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::types::{AxisWindow, DataPoint, PlotArea};

/// Horizontal nudge applied after the plot's left edge so x = min lands one
/// pixel right of the axis line.
pub const SCREEN_X_OFFSET_PX: f64 = 1.0;

/// Downward nudge of background geometry so the fill sits under the stroke.
pub const BACKGROUND_Y_OFFSET_PX: f64 = 2.0;

/// Point in surface pixel space (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Affine data-space to pixel-space mapping for one plot area.
///
/// The mapping never fails: a zero axis range yields NaN or infinite pixels,
/// which callers are expected to rule out through `AxisWindow::validate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMapping {
    plot: PlotArea,
    axes: AxisWindow,
}

impl PlotMapping {
    #[must_use]
    pub fn new(plot: PlotArea, axes: AxisWindow) -> Self {
        Self { plot, axes }
    }

    #[must_use]
    pub fn plot(self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn axes(self) -> AxisWindow {
        self.axes
    }

    /// Distance from the plot's left edge, before the screen offset.
    #[must_use]
    pub fn pixel_x(self, x: f64) -> f64 {
        self.plot.width * ((x - self.axes.min_x) / self.axes.range_x)
    }

    /// Height above the baseline.
    #[must_use]
    pub fn pixel_y_from_bottom(self, y: f64) -> f64 {
        self.plot.height * ((y - self.axes.min_y) / self.axes.range_y)
    }

    #[must_use]
    pub fn screen_x(self, x: f64) -> f64 {
        self.pixel_x(x) + self.plot.horizontal_start + SCREEN_X_OFFSET_PX
    }

    #[must_use]
    pub fn screen_y(self, y: f64) -> f64 {
        self.plot.border - self.pixel_y_from_bottom(y) + self.plot.height
    }

    /// Maps a point for the line and marker passes.
    #[must_use]
    pub fn project(self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(self.screen_x(point.x), self.screen_y(point.y))
    }

    /// Maps a point for the background pass.
    #[must_use]
    pub fn project_background(self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(
            self.screen_x(point.x),
            self.screen_y(point.y) + BACKGROUND_Y_OFFSET_PX,
        )
    }

    /// Maps every point for the line pass, keeping input order.
    #[must_use]
    pub fn project_all(self, points: &[DataPoint]) -> Vec<ScreenPoint> {
        #[cfg(feature = "parallel-projection")]
        {
            points.par_iter().map(|point| self.project(*point)).collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points.iter().map(|point| self.project(*point)).collect()
        }
    }

    /// Inverse of `screen_x`.
    #[must_use]
    pub fn data_x_at(self, screen_x: f64) -> f64 {
        let pixel = screen_x - self.plot.horizontal_start - SCREEN_X_OFFSET_PX;
        pixel / self.plot.width * self.axes.range_x + self.axes.min_x
    }

    /// Inverse of `screen_y`.
    #[must_use]
    pub fn data_y_at(self, screen_y: f64) -> f64 {
        let from_bottom = self.plot.border + self.plot.height - screen_y;
        from_bottom / self.plot.height * self.axes.range_y + self.axes.min_y
    }
}
