use std::io;
use thiserror::Error;

/// Host-level failures of the TINY front end.
///
/// Syntax problems in the program text are not represented here: they are
/// recorded as diagnostics and never abort a parse.
#[derive(Debug, Error)]
pub enum TinyError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("File write error: {0}")]
    FileWriteError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Compilation pipeline errors
    #[error("Compilation error in {stage}: {message}")]
    CompilationError { stage: String, message: String },
}

impl TinyError {
    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        TinyError::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

// Type alias for Result with TinyError
pub type TinyResult<T> = Result<T, TinyError>;
