use std::path::PathBuf;

/// The possible errors produced while generating a model.
#[derive(Debug, thiserror::Error)]
pub enum StabilityError {
    #[error("API key is missing. Please provide it or set the STABILITY_API_KEY environment variable.")]
    MissingApiKey,
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Output directory not found: {}", .0.display())]
    OutputDirNotFound(PathBuf),
    /// The API answered with a non-200 status. `body` carries the raw
    /// response text for diagnostics.
    #[error("API Error: {status}")]
    ApiError { status: u16, body: String },
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
