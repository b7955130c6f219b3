use camp_core::error::CoreError;

/// Errors from the camp API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Camp API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A domain-level error from `camp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The same mutation is already in flight.
    #[error("A request for this action is already in progress")]
    AlreadyPending,

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for client return values.
pub type ClientResult<T> = Result<T, ClientError>;
