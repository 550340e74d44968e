use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("line {line}: '{value}' is not a valid count")]
    MalformedCount { line: u64, value: String },

    #[error("{capability} is not available ({remedy})")]
    CapabilityUnavailable { capability: String, remedy: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Render error: {0}")]
    Render(String),
}
