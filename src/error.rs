use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("at least one input size is required")]
    NoSizes,

    #[error("input size {0} exceeds the i32 range of the generated sequence")]
    SizeTooLarge(usize),

    #[error("{0} must be greater than 0")]
    ZeroCount(&'static str),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
