use thiserror::Error;

/// Failures of a backend operation.
///
/// `Display` is the user-facing text; the chat prefixes it with
/// `Error: ` or `Error uploading PDF: `.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status, carrying the backend's `detail` or the operation fallback.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// 2xx status whose body is not the expected shape.
    #[error("{0}")]
    Malformed(String),

    #[error("could not read {0}")]
    ReadFile(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
