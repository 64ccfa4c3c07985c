use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::mapping::SCREEN_X_OFFSET_PX;
use crate::core::{DataPoint, LineSegment, PlotMapping, ScreenPoint};

/// Horizontal spacing, in pixels, between curtain columns.
pub const CURTAIN_COLUMN_SPACING_PX: f64 = 3.0;

/// How the area beneath a series is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundFillMode {
    /// One closed polygon per segment, down to the baseline.
    #[default]
    Polygon,
    /// Vertical strokes every few pixels from the baseline up to the curve.
    Curtain,
}

/// Closed fill polygon under one segment. Vertices are listed without
/// repeating the first one.
pub type FillPolygon = SmallVec<[ScreenPoint; 5]>;

/// Background geometry for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackgroundGeometry {
    Polygons(Vec<FillPolygon>),
    Curtain(Vec<LineSegment>),
}

impl BackgroundGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Polygons(polygons) => polygons.is_empty(),
            Self::Curtain(columns) => columns.is_empty(),
        }
    }
}

/// Projects the background beneath the polyline through every point.
///
/// The background pass ignores clipping and uses the background projection,
/// two pixels below the line. Curtain columns are only produced inside the
/// horizontal extent of the plot.
#[must_use]
pub fn project_background(
    points: &[DataPoint],
    mapping: PlotMapping,
    mode: BackgroundFillMode,
) -> BackgroundGeometry {
    let projected: Vec<ScreenPoint> = points
        .iter()
        .map(|point| mapping.project_background(*point))
        .collect();
    let plot = mapping.plot();
    let baseline_y = plot.baseline_y();
    let left_edge = plot.horizontal_start;

    match mode {
        BackgroundFillMode::Polygon => {
            let min_x = left_edge + SCREEN_X_OFFSET_PX;
            BackgroundGeometry::Polygons(
                projected
                    .windows(2)
                    .filter_map(|pair| segment_fill_polygon(pair[0], pair[1], baseline_y, min_x))
                    .collect(),
            )
        }
        BackgroundFillMode::Curtain => {
            let right_edge = left_edge + plot.width + SCREEN_X_OFFSET_PX;
            let mut columns = Vec::new();
            for pair in projected.windows(2) {
                push_curtain_columns(
                    &mut columns,
                    pair[0],
                    pair[1],
                    baseline_y,
                    (left_edge, right_edge),
                );
            }
            BackgroundGeometry::Curtain(columns)
        }
    }
}

/// Number of curtain columns between two screen x positions, endpoints
/// included.
#[must_use]
pub fn curtain_column_count(start_x: f64, end_x: f64) -> usize {
    let steps = ((end_x - start_x) / CURTAIN_COLUMN_SPACING_PX).ceil() + 1.0;
    if steps.is_finite() && steps >= 1.0 {
        steps as usize
    } else {
        0
    }
}

fn push_curtain_columns(
    columns: &mut Vec<LineSegment>,
    start: ScreenPoint,
    end: ScreenPoint,
    baseline_y: f64,
    (left_edge, right_edge): (f64, f64),
) {
    let count = curtain_column_count(start.x, end.x);
    if count == 0 {
        return;
    }
    let last = count - 1;

    // Walk only the column indices that can land inside the plot.
    let (first_visible, last_visible) = if last == 0 {
        (0, 0)
    } else {
        let step = (end.x - start.x) / last as f64;
        let lower = ((left_edge + 1.0 - start.x) / step).floor() - 1.0;
        let upper = ((right_edge - start.x) / step).ceil() + 1.0;
        if !lower.is_finite() || !upper.is_finite() {
            return;
        }
        (
            lower.clamp(0.0, last as f64) as usize,
            upper.clamp(0.0, last as f64) as usize,
        )
    };

    for column in first_visible..=last_visible {
        let t = if last > 0 {
            column as f64 / last as f64
        } else {
            0.0
        };
        let x = start.x + (end.x - start.x) * t;
        let y = start.y + (end.y - start.y) * t;

        // Columns on the axis line would paint over it.
        if x - left_edge > 1.0 && x <= right_edge {
            columns.push(LineSegment {
                x1: x,
                y1: baseline_y,
                x2: x,
                y2: y,
            });
        }
    }
}

fn segment_fill_polygon(
    start: ScreenPoint,
    end: ScreenPoint,
    baseline_y: f64,
    min_x: f64,
) -> Option<FillPolygon> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }

    let (start, end) = if start.x <= end.x {
        (start, end)
    } else {
        (end, start)
    };
    if end.x <= min_x {
        return None;
    }

    let start = if start.x < min_x {
        let t = (min_x - start.x) / (end.x - start.x);
        ScreenPoint::new(min_x, start.y + (end.y - start.y) * t)
    } else {
        start
    };
    if end.x - start.x <= 0.0 {
        return None;
    }

    let mut polygon = FillPolygon::new();
    polygon.push(start);
    polygon.push(end);
    polygon.push(ScreenPoint::new(end.x, baseline_y));
    polygon.push(ScreenPoint::new(start.x, baseline_y));
    Some(polygon)
}
