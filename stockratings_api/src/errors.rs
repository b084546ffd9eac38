//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The network call could not complete (DNS, refused connection, broken body stream).
    #[error("Request failed")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a status outside 200-299. The body is never read.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16 },
    /// The body was not valid JSON or did not match the expected type.
    #[error("Failed to decode response body")]
    Decode(#[source] serde_json::Error),
    /// Base URL and path did not form a valid URL.
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    /// A required configuration value is not set.
    #[error("Missing configuration value {0}")]
    MissingConfig(&'static str),
}

impl Error {
    /// Status code carried by [`Error::HttpStatus`], if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
