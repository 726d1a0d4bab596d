use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the model artifact at startup.
///
/// Any of these is fatal: the process must refuse to serve traffic.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model artifact at {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact at {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Model at {path:?} rejected a {expected}-feature input row: {reason}")]
    ShapeMismatch {
        path: PathBuf,
        expected: usize,
        reason: String,
    },

    #[error("Unsupported model artifact format at {path:?}: expected .onnx or .json")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors raised inside model invocation at request time.
///
/// Surfaced to the caller as an internal server error; never retried here.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to build input row: {reason}")]
    InputConstruction { reason: String },

    #[error("Model inference failed: {reason}")]
    Backend { reason: String },

    #[error("Model returned no output values")]
    EmptyOutput,
}
