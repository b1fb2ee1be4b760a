use thiserror::Error;

/// Errors surfaced by the binary. The text reducer itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A gated action was requested on blank text.
    #[error("Text area is empty!")]
    EmptyInput,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
