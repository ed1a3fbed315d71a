//! Error types for the interpretation layer.

use thiserror::Error;

/// Failures surfaced by an interpretation call.
///
/// All variants are session-local and recoverable: the caller may re-invoke
/// the same completed reading to retry. No automatic retry happens here.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// No API key was configured or found in the environment.
    #[error("missing DEEPSEEK_API_KEY environment variable")]
    MissingApiKey,

    /// The HTTP request could not be sent or completed.
    #[error("interpretation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("interpretation service returned {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// The response body could not be understood.
    #[error("malformed interpretation response: {0}")]
    MalformedResponse(String),
}
