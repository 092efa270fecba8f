use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} values (one per series), got {actual}")]
    SeriesCountMismatch { expected: usize, actual: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing surface error: {0}")]
    Surface(String),
}
