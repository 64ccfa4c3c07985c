mod graph_config;
mod line_graph;
mod series_renderer;

pub use graph_config::{DEFAULT_BACKGROUND_ARGB, LineGraphConfig};
pub use line_graph::{GraphSeries, LineGraph};
pub use series_renderer::{
    POPUP_ANCHOR_GAP_PX, SeriesRenderRequest, SeriesRenderStats, SeriesRenderer, SeriesStyle,
};
