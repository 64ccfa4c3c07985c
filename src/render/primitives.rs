use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScreenPoint;
use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xFF00_0000 | u32::from_be_bytes([0, red, green, blue]))
    }

    /// Decodes a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(packed: u32) -> Self {
        let [alpha, red, green, blue] = packed.to_be_bytes();
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Encodes as packed `0xAARRGGBB`, rounding each channel.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([
            channel(self.alpha),
            channel(self.red),
            channel(self.green),
            channel(self.blue),
        ])
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.is_finite() {
            return Err(GraphError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        // A zero-width stroke is a hairline on most backends.
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.cx.is_finite() && self.cy.is_finite()
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.is_finite() {
            return Err(GraphError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GraphError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled, implicitly closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: SmallVec<[ScreenPoint; 5]>,
    pub color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = ScreenPoint>, color: Color) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            color,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|vertex| vertex.is_finite())
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InvalidData(
                "polygon needs at least three vertices".to_owned(),
            ));
        }
        if !self.is_finite() {
            return Err(GraphError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
