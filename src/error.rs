use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failure constructing a drawing range from caller bounds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("invalid range bounds: x=[{min_x}, {max_x}], y=[{min_y}, {max_y}], log_y={log_y}")]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        log_y: bool,
    },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Range(#[from] RangeError),
}
