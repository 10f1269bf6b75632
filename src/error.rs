/// Error types shared by the fetch client, the viewer and the render targets
use thiserror::Error;

/// Shown when `k` is not a strictly positive integer.
pub const INVALID_K_MESSAGE: &str = "Please enter a positive integer for k.";
/// Shown when the server rejects the request without an `error` message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Unable to fetch products.";
/// Shown for transport and decoding failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error fetching products.";

/// The raw input did not parse as a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_K_MESSAGE)]
pub struct InvalidK {
    pub raw: String,
}

/// Errors that can occur while fetching the top products
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx response; `message` is the payload's `error` field if it carried one
    #[error("Server responded with status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Connection, DNS or TLS failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not the expected JSON document
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message presented to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Server { message: Some(m), .. } => m.clone(),
            FetchError::Server { message: None, .. } => FETCH_FALLBACK_MESSAGE.to_string(),
            FetchError::Transport(_) | FetchError::Decode(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Failure writing a render state into a target
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize rows: {0}")]
    Json(#[from] serde_json::Error),
}
