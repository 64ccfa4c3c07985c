use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PlotArea;
use crate::error::GraphResult;
use crate::render::{CirclePrimitive, DrawSurface, LinePrimitive, PolygonPrimitive};

/// Draw layers of a graph frame, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderLayerKind {
    Background,
    Series,
    Markers,
}

impl RenderLayerKind {
    pub const CANONICAL_ORDER: [Self; 3] = [Self::Background, Self::Series, Self::Markers];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: RenderLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: RenderLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty() && self.polygons.is_empty()
    }
}

/// Backend-agnostic scene for one graph draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub plot_area: PlotArea,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(plot_area: PlotArea) -> Self {
        Self {
            plot_area,
            layers: RenderLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: RenderLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: RenderLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::empty(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    pub fn push_line(&mut self, kind: RenderLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_circle(&mut self, kind: RenderLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_polygon(&mut self, kind: RenderLayerKind, polygon: PolygonPrimitive) {
        self.layer_mut(kind).polygons.push(polygon);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.layers.iter().flat_map(|layer| layer.circles.iter())
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.layers.iter().flat_map(|layer| layer.polygons.iter())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.polygons.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.plot_area.validate()?;
        for line in self.lines() {
            line.validate()?;
        }
        for circle in self.circles() {
            circle.validate()?;
        }
        for polygon in self.polygons() {
            polygon.validate()?;
        }
        Ok(())
    }

    /// Issues every command to `surface` layer by layer.
    ///
    /// Commands with non-finite geometry are dropped, matching how canvas
    /// backends ignore NaN coordinates. Returns the number of skipped commands.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> GraphResult<usize> {
        let mut skipped = 0;
        for layer in &self.layers {
            for polygon in &layer.polygons {
                if polygon.is_finite() {
                    surface.fill_polygon(polygon)?;
                } else {
                    skipped += 1;
                }
            }
            for line in &layer.lines {
                if line.is_finite() {
                    surface.draw_line(line)?;
                } else {
                    skipped += 1;
                }
            }
            for circle in &layer.circles {
                if circle.is_finite() {
                    surface.draw_circle(circle)?;
                } else {
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            trace!(skipped, "dropped non-finite draw commands during replay");
        }
        Ok(skipped)
    }
}
