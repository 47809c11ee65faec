use thiserror::Error;

pub type RevealResult<T> = Result<T, RevealError>;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("node index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("render backend failure: {0}")]
    Backend(String),
}
