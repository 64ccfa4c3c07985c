use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisWindow, BackgroundFillMode, ClipWindow, DataPoint, PlotArea};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{
    PopupAnchor, PopupSink, TouchEvent, TouchEventKind, hit_test_popup_anchors,
};
use crate::render::{Color, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{
    LineGraphConfig, SeriesRenderRequest, SeriesRenderStats, SeriesRenderer, SeriesStyle,
};

/// Data and stroke of one series owned by a `LineGraph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSeries {
    pub points: Vec<DataPoint>,
    pub style: SeriesStyle,
}

impl GraphSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, style: SeriesStyle) -> Self {
        Self { points, style }
    }
}

/// Line graph host: owns the series, the background/marker settings, the
/// popup anchors of the last redraw and the popup binding.
pub struct LineGraph<R: Renderer> {
    renderer: R,
    series_renderer: SeriesRenderer,
    series: IndexMap<String, GraphSeries>,
    axes: Option<AxisWindow>,
    popup_anchors: Vec<PopupAnchor>,
    popup_sink: Option<Box<dyn PopupSink>>,
}

impl<R: Renderer> LineGraph<R> {
    pub fn new(renderer: R, config: LineGraphConfig) -> GraphResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            series_renderer: SeriesRenderer::new(config),
            series: IndexMap::new(),
            axes: None,
            popup_anchors: Vec::new(),
            popup_sink: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> LineGraphConfig {
        self.series_renderer.config()
    }

    pub fn set_config(&mut self, config: LineGraphConfig) -> GraphResult<()> {
        *self.series_renderer.config_mut() = config.validate()?;
        Ok(())
    }

    /// Inserts or replaces a series, returning the replaced one.
    ///
    /// A replaced series keeps its position in draw order. The style is
    /// validated up front so render backends agree on what they accept.
    pub fn set_series(
        &mut self,
        id: impl Into<String>,
        series: GraphSeries,
    ) -> GraphResult<Option<GraphSeries>> {
        let id = id.into();
        if let Err(err) = series.style.validate() {
            warn!(series_id = %id, error = %err, "rejected series style");
            return Err(GraphError::InvalidData(format!(
                "series `{id}` has an invalid style: {err}"
            )));
        }
        debug!(series_id = %id, points = series.points.len(), "set series");
        Ok(self.series.insert(id, series))
    }

    pub fn remove_series(&mut self, id: &str) -> GraphResult<GraphSeries> {
        self.series
            .shift_remove(id)
            .ok_or_else(|| GraphError::UnknownSeries(id.to_owned()))
    }

    pub fn append_point(&mut self, id: &str, point: DataPoint) -> GraphResult<()> {
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownSeries(id.to_owned()))?;
        if let Some(last) = series.points.last() {
            if point.x < last.x {
                warn!(
                    series_id = id,
                    x = point.x,
                    last_x = last.x,
                    "appending out-of-order point"
                );
            }
        }
        series.points.push(point);
        Ok(())
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&GraphSeries> {
        self.series.get(id)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Pins the axis window; `None` fits it to the data on every redraw.
    pub fn set_axis_window(&mut self, axes: Option<AxisWindow>) {
        self.axes = axes;
    }

    /// Window used by the next redraw.
    #[must_use]
    pub fn axis_window(&self) -> Option<AxisWindow> {
        self.axes.or_else(|| {
            AxisWindow::fit_points(self.series.values().flat_map(|series| series.points.iter()))
        })
    }

    /// Background fill color as packed `0xAARRGGBB`.
    #[must_use]
    pub fn background_color(&self) -> u32 {
        self.config().background_color.to_argb()
    }

    pub fn set_background_color(&mut self, argb: u32) {
        self.series_renderer.config_mut().background_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn draw_background(&self) -> bool {
        self.config().draw_background
    }

    pub fn set_draw_background(&mut self, draw_background: bool) {
        self.series_renderer.config_mut().draw_background = draw_background;
    }

    #[must_use]
    pub fn background_fill_mode(&self) -> BackgroundFillMode {
        self.config().background_fill_mode
    }

    pub fn set_background_fill_mode(&mut self, mode: BackgroundFillMode) {
        self.series_renderer.config_mut().background_fill_mode = mode;
    }

    #[must_use]
    pub fn draw_markers(&self) -> bool {
        self.config().draw_markers
    }

    pub fn set_draw_markers(&mut self, draw_markers: bool) {
        self.series_renderer.config_mut().draw_markers = draw_markers;
    }

    /// Binds the popup used to show touched values.
    pub fn set_popup_sink(&mut self, sink: Box<dyn PopupSink>) {
        self.popup_sink = Some(sink);
    }

    pub fn clear_popup_sink(&mut self) -> Option<Box<dyn PopupSink>> {
        self.popup_sink.take()
    }

    /// Anchors recorded by the last redraw, in draw order.
    #[must_use]
    pub fn popup_anchors(&self) -> &[PopupAnchor] {
        &self.popup_anchors
    }

    /// Runs a full redraw pass without handing the frame to the renderer.
    ///
    /// Popup anchors from the previous pass are discarded. With no data the
    /// frame is empty.
    pub fn build_frame(
        &mut self,
        plot: PlotArea,
        clip: Option<ClipWindow>,
    ) -> GraphResult<RenderFrame> {
        let plot = plot.validate()?;
        self.popup_anchors.clear();

        let mut frame = RenderFrame::new(plot);
        let Some(axes) = self.axis_window() else {
            debug!("no data to render");
            return Ok(frame);
        };
        let axes = axes.validate()?;

        let mut totals = SeriesRenderStats::default();
        for (id, series) in &self.series {
            let request = SeriesRenderRequest::new(plot, axes, series.style).with_clip(clip);
            let stats = self.series_renderer.render_series(
                id,
                &series.points,
                &request,
                &mut frame,
                &mut self.popup_anchors,
            );
            totals.segments += stats.segments;
            totals.markers += stats.markers;
            totals.background_primitives += stats.background_primitives;
        }

        debug!(
            series = self.series.len(),
            segments = totals.segments,
            markers = totals.markers,
            background = totals.background_primitives,
            lines = frame.line_count(),
            circles = frame.circle_count(),
            polygons = frame.polygon_count(),
            anchors = self.popup_anchors.len(),
            "built graph frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self, plot: PlotArea, clip: Option<ClipWindow>) -> GraphResult<()> {
        let frame = self.build_frame(plot, clip)?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, typically from a GTK draw
    /// callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        plot: PlotArea,
        clip: Option<ClipWindow>,
    ) -> GraphResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame(plot, clip)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Shows a popup for the marker under a touch-down, if any.
    ///
    /// Returns `true` when a popup was shown.
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        if event.kind != TouchEventKind::Down {
            return false;
        }
        let config = self.config();
        let Some(anchor) = hit_test_popup_anchors(
            &self.popup_anchors,
            event.x,
            event.y,
            config.popup_hit_radius_px,
        ) else {
            return false;
        };

        let Some(sink) = self.popup_sink.as_mut() else {
            warn!(series_id = %anchor.series_id, "touched a marker without a popup binding");
            return false;
        };
        let precision = usize::from(config.popup_precision);
        let text = format!("{:.precision$}; {:.precision$}", anchor.x, anchor.y);
        sink.show_popup(anchor, &text);
        true
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
