//! Error types shared by the transforms and the window library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Supplied buffer is not the same size as the transform. Transform size: {expected}, buffer size: {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid buffer size {0}, must be a power of 2")]
    InvalidSize(usize),

    #[error("Window length {0} is too short, at least 2 samples are required")]
    DegenerateWindow(usize),

    #[error("Trig table index {index} exceeds table capacity {capacity}")]
    TableBounds { index: usize, capacity: usize },

    #[error("Unknown window function: {0}")]
    UnknownWindow(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
