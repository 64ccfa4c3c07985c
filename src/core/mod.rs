pub mod area_series;
pub mod line_series;
pub mod mapping;
pub mod types;

pub use area_series::{
    BackgroundFillMode, BackgroundGeometry, CURTAIN_COLUMN_SPACING_PX, FillPolygon,
    curtain_column_count, project_background,
};
pub use line_series::{LinePass, LineSegment, RetainedVertex, project_line_pass};
pub use mapping::{BACKGROUND_Y_OFFSET_PX, PlotMapping, SCREEN_X_OFFSET_PX, ScreenPoint};
pub use types::{AxisWindow, ClipWindow, DataPoint, PlotArea};
