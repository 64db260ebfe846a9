use thiserror::Error;

/// Errors surfaced by a `GetUserViews` query.
///
/// None of these are retried and none are fatal; callers may submit again.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The username was empty, so no request was sent.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Network, DNS, TLS, or non-2xx failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The GraphQL layer returned an `errors` array.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// The response carried neither `data` nor `errors`.
    #[error("GraphQL response contained no data")]
    EmptyResponse,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid GraphQL endpoint: {0}")]
    InvalidEndpoint(String),

    /// The query succeeded but the platform has no such user.
    #[error("User not found: {username}")]
    NotFound { username: String },
}

impl QueryError {
    /// `true` when the failure came from the transport rather than the query.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Http(_))
    }
}
