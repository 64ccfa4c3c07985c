use crate::error::GraphResult;
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive};

/// Immediate-mode drawing primitives a platform canvas has to provide.
///
/// `RenderFrame::replay` drives any implementation, so platform glue only
/// needs these three calls.
pub trait DrawSurface {
    fn draw_line(&mut self, line: &LinePrimitive) -> GraphResult<()>;
    fn draw_circle(&mut self, circle: &CirclePrimitive) -> GraphResult<()>;
    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> GraphResult<()>;
}

/// One command captured by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    FillPolygon(PolygonPrimitive),
}

/// Surface that keeps every command in call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line(_)))
            .count()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle(_)))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, line: &LinePrimitive) -> GraphResult<()> {
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> GraphResult<()> {
        self.commands.push(DrawCommand::Circle(*circle));
        Ok(())
    }

    fn fill_polygon(&mut self, polygon: &PolygonPrimitive) -> GraphResult<()> {
        self.commands.push(DrawCommand::FillPolygon(polygon.clone()));
        Ok(())
    }
}
