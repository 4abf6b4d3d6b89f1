use thiserror::Error;

/// Errors returned by the location API client.
///
/// [`ClientError::Http`] and [`ClientError::UnexpectedStatus`] mean the API
/// could not be reached or refused the request; the rest mean it answered
/// with something other than a usable success.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// `POST /api/location/add` answered without a truthy `success`.
    #[error("location API rejected the request: {message}")]
    Rejected { message: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// True when the failure happened before the API produced a usable answer.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::UnexpectedStatus { .. }
        )
    }
}
