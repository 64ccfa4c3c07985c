use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

use crate::core::{
    AxisWindow, BackgroundGeometry, ClipWindow, DataPoint, PlotArea, PlotMapping,
    project_background, project_line_pass,
};
use crate::interaction::PopupAnchor;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RenderFrame, RenderLayerKind,
};

use super::LineGraphConfig;

/// Gap between the marker and the popup anchor, on top of the label offset.
pub const POPUP_ANCHOR_GAP_PX: f64 = 20.0;

/// Stroke of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub thickness: f64,
    pub color: Color,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(thickness: f64, color: Color) -> Self {
        Self { thickness, color }
    }

    /// Rejects non-finite or negative thickness and out-of-range colors.
    pub fn validate(self) -> GraphResult<Self> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(GraphError::InvalidData(format!(
                "series thickness must be finite and >= 0, got {}",
                self.thickness
            )));
        }
        self.color.validate()?;
        Ok(self)
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new(3.0, Color::from_argb(0xFF00_77CC))
    }
}

/// Per-call inputs of `SeriesRenderer::render_series`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRenderRequest {
    pub plot: PlotArea,
    pub axes: AxisWindow,
    pub style: SeriesStyle,
    /// When set, the line and marker passes only keep points strictly
    /// inside the window.
    pub clip: Option<ClipWindow>,
}

impl SeriesRenderRequest {
    #[must_use]
    pub fn new(plot: PlotArea, axes: AxisWindow, style: SeriesStyle) -> Self {
        Self {
            plot,
            axes,
            style,
            clip: None,
        }
    }

    #[must_use]
    pub fn with_clip(mut self, clip: Option<ClipWindow>) -> Self {
        self.clip = clip;
        self
    }
}

/// What one `render_series` call appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesRenderStats {
    pub segments: usize,
    pub markers: usize,
    pub background_primitives: usize,
}

/// Turns one series into frame primitives.
///
/// Holds only the background and marker settings; everything else arrives
/// with each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRenderer {
    config: LineGraphConfig,
}

impl SeriesRenderer {
    #[must_use]
    pub fn new(config: LineGraphConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> LineGraphConfig {
        self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut LineGraphConfig {
        &mut self.config
    }

    /// Appends background, line and marker primitives for `points`.
    ///
    /// Markers push one `PopupAnchor` each onto `anchors`; the caller owns
    /// that collection and clears it between full redraws. Zero axis ranges
    /// are not checked here and produce non-finite geometry.
    ///
    /// Marker circles sit on the line vertex, including the one pixel screen
    /// offset, while anchors start from the unshifted pixel x. Hit testing is
    /// therefore centered `popup_label_offset_px + 20 - horizontal_start - 1`
    /// pixels right of the visible circle.
    pub fn render_series(
        &self,
        series_id: &str,
        points: &[DataPoint],
        request: &SeriesRenderRequest,
        frame: &mut RenderFrame,
        anchors: &mut Vec<PopupAnchor>,
    ) -> SeriesRenderStats {
        let mut stats = SeriesRenderStats::default();
        if points.is_empty() {
            return stats;
        }
        let mapping = PlotMapping::new(request.plot, request.axes);

        if self.config.draw_background {
            stats.background_primitives = self.append_background(points, mapping, frame);
        }

        let pass = project_line_pass(points, mapping, request.clip);
        stats.segments = pass.segments.len();
        for segment in &pass.segments {
            frame.push_line(
                RenderLayerKind::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    request.style.thickness,
                    request.style.color,
                ),
            );
        }

        if self.config.draw_markers {
            for vertex in &pass.vertices {
                frame.push_circle(
                    RenderLayerKind::Markers,
                    CirclePrimitive::new(
                        vertex.screen.x,
                        vertex.screen.y,
                        self.config.marker_radius_px,
                        request.style.color,
                    ),
                );
                anchors.push(PopupAnchor {
                    series_id: series_id.to_owned(),
                    x: vertex.point.x,
                    y: vertex.point.y,
                    anchor_x: vertex.pixel_x
                        + self.config.popup_label_offset_px
                        + POPUP_ANCHOR_GAP_PX,
                    anchor_y: vertex.screen.y,
                });
            }
            stats.markers = pass.vertices.len();
        }

        trace!(
            series_id,
            points = points.len(),
            segments = stats.segments,
            markers = stats.markers,
            background = stats.background_primitives,
            "rendered series"
        );
        stats
    }

    fn append_background(
        &self,
        points: &[DataPoint],
        mapping: PlotMapping,
        frame: &mut RenderFrame,
    ) -> usize {
        let color = self.config.background_color;
        match project_background(points, mapping, self.config.background_fill_mode) {
            BackgroundGeometry::Polygons(polygons) => {
                let count = polygons.len();
                for polygon in polygons {
                    frame.push_polygon(
                        RenderLayerKind::Background,
                        PolygonPrimitive::new(polygon, color),
                    );
                }
                count
            }
            BackgroundGeometry::Curtain(columns) => {
                let count = columns.len();
                for column in columns {
                    frame.push_line(
                        RenderLayerKind::Background,
                        LinePrimitive::new(
                            column.x1,
                            column.y1,
                            column.x2,
                            column.y2,
                            self.config.background_stroke_width,
                            color,
                        ),
                    );
                }
                count
            }
        }
    }
}

impl Default for SeriesRenderer {
    fn default() -> Self {
        Self::new(LineGraphConfig::default())
    }
}
