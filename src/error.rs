//! Error type shared by every stage of the edge pipeline.
//!
//! Failures fall into three groups: the input could not be loaded, the
//! decoded data has the wrong shape, or a parameter is out of range. All of
//! them are reported to the caller; nothing is swallowed past the load
//! boundary.
use std::path::PathBuf;

/// Errors produced by loading, validating, or processing an image.
#[derive(thiserror::Error, Debug)]
pub enum EdgeError {
    /// The source file does not exist.
    #[error("File does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The source file exists but could not be decoded.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be encoded or written.
    #[error("Failed to save {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded data is empty or lacks the expected layout.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A parameter was rejected before any computation ran.
    #[error("Parameter `{name}` out of range ({value}): {reason}")]
    ParameterOutOfRange {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EdgeError {
    pub(crate) fn out_of_range(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        Self::ParameterOutOfRange {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, EdgeError>;
