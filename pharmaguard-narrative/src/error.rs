use thiserror::Error;

/// Error type for narrative generation.
#[derive(Error, Debug)]
pub enum NarrativeError {
    /// No API credential was configured.
    #[error("No API credentials configured for narrative generation")]
    NoCredentials,

    /// The request never produced an HTTP response.
    #[error("Request error when calling {url}: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("HTTP status {code} from {url}")]
    Status { url: String, code: u16 },

    /// The response body could not be understood.
    #[error("Unreadable response from narrative service: {0}")]
    InvalidResponse(String),

    /// The response was well formed but had no text in it.
    #[error("Narrative service returned no text")]
    EmptyResponse,

    /// Every configured credential was tried and failed.
    #[error("All {attempts} credentials failed; last error: {last}")]
    Exhausted {
        attempts: usize,
        last: Box<NarrativeError>,
    },
}

/// Result type alias for pharmaguard-narrative operations.
pub type Result<T> = std::result::Result<T, NarrativeError>;
