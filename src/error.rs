use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid axis range: range_x={range_x}, range_y={range_y}")]
    InvalidAxisRange { range_x: f64, range_y: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown series `{0}`")]
    UnknownSeries(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
