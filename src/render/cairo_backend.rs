use cairo::{Context, Format, ImageSurface};
use std::f64::consts::TAU;

use crate::error::{GraphError, GraphResult};
use crate::render::{
    CirclePrimitive, Color, DrawSurface, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub polygons_filled: usize,
    pub commands_skipped: usize,
}

/// Renderers that can draw into an external Cairo context, such as the one
/// handed to a GTK `DrawingArea` callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()>;
}

/// Cairo renderer backend.
///
/// Draws either into its own offscreen image surface through
/// `Renderer::render` or into a caller-owned context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GraphError::InvalidPlotArea {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// `None` keeps whatever the target already contains.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> GraphResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.plot_area.validate()?;

        if let Some(color) = self.clear_color {
            apply_color(context, color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut target = CairoDrawTarget {
            context,
            stats: CairoRenderStats::default(),
        };
        let skipped = frame.replay(&mut target)?;
        target.stats.commands_skipped = skipped;
        self.last_stats = target.stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Replay only hands over finite geometry, so validating here rejects bad
/// styles without breaking the non-finite skip.
struct CairoDrawTarget<'a> {
    context: &'a Context,
    stats: CairoRenderStats,
}

impl DrawSurface for CairoDrawTarget<'_> {
    fn draw_line(&mut self, line: &LinePrimitive) -> GraphResult<()> {
        line.validate()?;
        apply_color(self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> GraphResult<()> {
        circle.validate()?;
        apply_color(self.context, circle.color);
        self.context.new_sub_path();
        self.context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> GraphResult<()> {
        polygon.validate()?;
        let mut vertices = polygon.vertices.iter();
        let Some(first) = vertices.next() else {
            return Ok(());
        };

        apply_color(self.context, polygon.color);
        self.context.move_to(first.x, first.y);
        for vertex in vertices {
            self.context.line_to(vertex.x, vertex.y);
        }
        self.context.close_path();
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        self.stats.polygons_filled += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GraphError {
    GraphError::Backend(format!("{prefix}: {err}"))
}
