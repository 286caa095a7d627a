//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Each variant belongs to one pipeline stage (see [`Stage`]) so callers can
//! report where a run stopped.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Stage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input image not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image must be at least 1x1, got: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("PNG encoding error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    /// Pipeline stage the error was raised in.
    pub fn stage(&self) -> Stage {
        match self {
            Error::MissingInput { .. } | Error::Read { .. } | Error::Decode { .. } => {
                Stage::Decode
            }
            Error::EmptyImage { .. } => Stage::Sample,
            Error::InvalidArgument { .. } => Stage::Classify,
            Error::Encode(_) => Stage::Encode,
            Error::Write { .. } => Stage::Write,
            Error::Report(_) => Stage::Report,
        }
    }
}
