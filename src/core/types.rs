use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// One sample of a series in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point whose x is the unix timestamp of `time` in seconds.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> GraphResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            GraphError::InvalidData(format!("value {value} cannot be represented as f64"))
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        })
    }
}

/// Pixel metrics of the plotting area inside the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    /// Margin reserved above the plot; the baseline sits at `height + border`.
    pub border: f64,
    /// Left edge of the plot, usually the width of the vertical axis labels.
    pub horizontal_start: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: f64, height: f64, border: f64, horizontal_start: f64) -> Self {
        Self {
            width,
            height,
            border,
            horizontal_start,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.border.is_finite()
            && self.horizontal_start.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::InvalidPlotArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Y coordinate of the bottom edge of the plot.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height + self.border
    }
}

/// Visible data bounds expressed as minimum plus span per axis.
///
/// Ranges must be strictly positive; a zero range makes the raw mapping
/// produce NaN or infinite pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub range_x: f64,
    pub range_y: f64,
}

impl AxisWindow {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, range_x: f64, range_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            range_x,
            range_y,
        }
    }

    /// Smallest window covering every point; a flat axis is widened by 1.0.
    ///
    /// Returns `None` when no finite point exists.
    #[must_use]
    pub fn fit_points<'a>(points: impl IntoIterator<Item = &'a DataPoint>) -> Option<Self> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                continue;
            }
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
        if !min_x.is_finite() {
            return None;
        }

        let range_x = if max_x > min_x { max_x - min_x } else { 1.0 };
        let range_y = if max_y > min_y { max_y - min_y } else { 1.0 };
        Some(Self::new(min_x, min_y, range_x, range_y))
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.min_x + self.range_x
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.min_y + self.range_y
    }

    pub fn validate(self) -> GraphResult<Self> {
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.range_x.is_finite()
            && self.range_y.is_finite();
        if !finite || self.range_x <= 0.0 || self.range_y <= 0.0 {
            return Err(GraphError::InvalidAxisRange {
                range_x: self.range_x,
                range_y: self.range_y,
            });
        }
        Ok(self)
    }
}

/// Exclusive x-window used to clip the line pass to the visible data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipWindow {
    pub first_x: f64,
    pub last_x: f64,
}

impl ClipWindow {
    #[must_use]
    pub fn new(first_x: f64, last_x: f64) -> Self {
        Self { first_x, last_x }
    }

    /// Both bounds are exclusive.
    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        x > self.first_x && x < self.last_x
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisWindow, ClipWindow, DataPoint, PlotArea};
    use crate::error::GraphError;

    #[test]
    fn clip_window_bounds_are_exclusive() {
        let clip = ClipWindow::new(2.0, 8.0);
        assert!(!clip.contains(2.0));
        assert!(clip.contains(2.5));
        assert!(clip.contains(7.999));
        assert!(!clip.contains(8.0));
    }

    #[test]
    fn fit_points_widens_flat_axes() {
        let points = [DataPoint::new(3.0, 7.0), DataPoint::new(3.0, 7.0)];
        let window = AxisWindow::fit_points(&points).expect("window");
        assert_eq!(window, AxisWindow::new(3.0, 7.0, 1.0, 1.0));
    }

    #[test]
    fn fit_points_ignores_non_finite_samples() {
        let points = [
            DataPoint::new(f64::NAN, 1.0),
            DataPoint::new(-2.0, 4.0),
            DataPoint::new(6.0, -1.0),
        ];
        let window = AxisWindow::fit_points(&points).expect("window");
        assert_eq!(window, AxisWindow::new(-2.0, -1.0, 8.0, 5.0));
        let empty: [DataPoint; 0] = [];
        assert!(AxisWindow::fit_points(&empty).is_none());
    }

    #[test]
    fn axis_window_rejects_zero_range() {
        let err = AxisWindow::new(0.0, 0.0, 0.0, 10.0)
            .validate()
            .expect_err("zero range");
        assert!(matches!(err, GraphError::InvalidAxisRange { .. }));
    }

    #[test]
    fn plot_area_baseline_includes_border() {
        let plot = PlotArea::new(300.0, 200.0, 20.0, 40.0);
        assert_eq!(plot.baseline_y(), 220.0);
        assert!(PlotArea::new(0.0, 200.0, 0.0, 0.0).validate().is_err());
    }
}
