use thiserror::Error;

pub type ShowroomResult<T> = Result<T, ShowroomError>;

#[derive(Debug, Error)]
pub enum ShowroomError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    #[error("catalog parse failed: {0}")]
    Parse(String),

    #[error("index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("start index {index} out of range for {len} images")]
    InvalidStartIndex { index: usize, len: usize },

    #[error("unknown vehicle id: {0}")]
    UnknownVehicle(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
