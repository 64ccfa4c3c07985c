use serde::{Deserialize, Serialize};

use crate::core::{ClipWindow, DataPoint, PlotMapping, ScreenPoint};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn between(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }
}

/// A point that survived clipping, with its line-pass pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetainedVertex {
    /// Index into the input slice.
    pub index: usize,
    pub point: DataPoint,
    pub screen: ScreenPoint,
    /// Distance from the plot's left edge before the screen offset.
    pub pixel_x: f64,
}

/// Geometry produced by the line pass of one series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePass {
    pub segments: Vec<LineSegment>,
    pub vertices: Vec<RetainedVertex>,
}

/// Projects points into segments between consecutive retained points.
///
/// With a clip window, points whose raw x is not strictly inside it are
/// dropped and the last retained point stays the start of the next segment.
/// The first retained point only opens the polyline, so a sample sitting at
/// the pixel origin is never mistaken for "no previous point".
#[must_use]
pub fn project_line_pass(
    points: &[DataPoint],
    mapping: PlotMapping,
    clip: Option<ClipWindow>,
) -> LinePass {
    let retained: Vec<(usize, DataPoint)> = points
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, point)| clip.is_none_or(|window| window.contains(point.x)))
        .collect();
    let projected: Vec<DataPoint> = retained.iter().map(|(_, point)| *point).collect();
    let screens = mapping.project_all(&projected);

    let mut pass = LinePass {
        segments: Vec::with_capacity(retained.len().saturating_sub(1)),
        vertices: Vec::with_capacity(retained.len()),
    };

    let mut previous: Option<ScreenPoint> = None;
    for ((index, point), screen) in retained.into_iter().zip(screens) {
        if let Some(start) = previous {
            pass.segments.push(LineSegment::between(start, screen));
        }
        pass.vertices.push(RetainedVertex {
            index,
            point,
            screen,
            pixel_x: mapping.pixel_x(point.x),
        });
        previous = Some(screen);
    }

    pass
}
