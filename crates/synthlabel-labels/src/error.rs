/// An error type for label output.
#[derive(thiserror::Error, Debug)]
pub enum LabelError {
    /// Error to create or write a label file.
    #[error("Failed to write the label file. {0}")]
    FileError(#[from] std::io::Error),
}

/// Result type for label output.
pub type LabelResult<T> = Result<T, LabelError>;
