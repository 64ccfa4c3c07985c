use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::LineGraph;
use crate::core::{ClipWindow, PlotArea};
use crate::interaction::TouchEvent;
use crate::render::CairoRenderer;

/// Margins between the drawing-area bounds and the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GtkPlotLayout {
    pub border: f64,
    pub horizontal_start: f64,
}

impl GtkPlotLayout {
    #[must_use]
    pub fn plot_area(self, width: i32, height: i32) -> PlotArea {
        PlotArea::new(
            f64::from(width) - self.horizontal_start - 1.0,
            f64::from(height) - 2.0 * self.border,
            self.border,
            self.horizontal_start,
        )
    }
}

impl Default for GtkPlotLayout {
    fn default() -> Self {
        Self {
            border: 20.0,
            horizontal_start: 0.0,
        }
    }
}

/// Hosts a `LineGraph` inside a `gtk::DrawingArea`.
///
/// Draw callbacks run a full redraw on the area's cairo context and primary
/// button presses are forwarded to `LineGraph::on_touch`.
pub struct GtkLineGraphAdapter {
    graph: Rc<RefCell<LineGraph<CairoRenderer>>>,
    layout: GtkPlotLayout,
    clip: Rc<RefCell<Option<ClipWindow>>>,
}

impl GtkLineGraphAdapter {
    #[must_use]
    pub fn new(graph: LineGraph<CairoRenderer>, layout: GtkPlotLayout) -> Self {
        Self {
            graph: Rc::new(RefCell::new(graph)),
            layout,
            clip: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn graph(&self) -> Rc<RefCell<LineGraph<CairoRenderer>>> {
        Rc::clone(&self.graph)
    }

    /// Clip window used by subsequent draws; call `queue_draw` afterwards.
    pub fn set_clip_window(&self, clip: Option<ClipWindow>) {
        *self.clip.borrow_mut() = clip;
    }

    pub fn attach(&self, area: &gtk::DrawingArea) {
        let graph = Rc::clone(&self.graph);
        let clip = Rc::clone(&self.clip);
        let layout = self.layout;
        area.set_draw_func(move |_area, context, width, height| {
            let plot = layout.plot_area(width, height);
            let clip = *clip.borrow();
            if let Err(err) = graph
                .borrow_mut()
                .render_on_cairo_context(context, plot, clip)
            {
                warn!(error = %err, "line graph draw failed");
            }
        });

        let click = gtk::GestureClick::new();
        let graph = Rc::clone(&self.graph);
        click.connect_pressed(move |_gesture, _n_press, x, y| {
            graph.borrow_mut().on_touch(TouchEvent::down(x, y));
        });
        area.add_controller(click);
    }
}
