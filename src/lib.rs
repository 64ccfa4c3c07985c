//! graph-view: headless line and area graph rendering.
//!
//! Series are mapped from data space into pixel space and emitted as a
//! backend-agnostic `RenderFrame`; backends implement `render::Renderer` or
//! replay frames onto a `render::DrawSurface`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineGraph, LineGraphConfig};
pub use error::{GraphError, GraphResult};
