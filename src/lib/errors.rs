use std::fmt;

/// Failure taxonomy for everything the console does over the wire or while
/// loading configuration. All variants are safe to render to the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Missing or invalid deployment configuration, or bad caller input.
    Config(String),
    /// The server could not be reached at all.
    Network(String),
    /// The request was aborted after the shared timeout elapsed.
    Timeout(String),
    /// The server answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    /// The request body could not be encoded.
    Encode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Configuration error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timed out: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Decode(message) => write!(formatter, "Response error: {message}"),
            AppError::Encode(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
