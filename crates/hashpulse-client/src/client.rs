//! HTTP client for the Hashnode GraphQL API.
//!
//! Wraps `reqwest` with bearer-token auth, the fixed `GetUserViews` query, and
//! GraphQL envelope handling. A response with an `errors` array surfaces as
//! [`QueryError::Graphql`]; a `null` user is a successful, empty result.

use std::time::Duration;

use hashpulse_core::{ClientConfig, QueryResult};
use reqwest::{Client, Url};

use crate::error::QueryError;
use crate::query::GraphqlRequest;
use crate::types::{GraphqlResponse, UserViewsData};

/// Client for the Hashnode GraphQL endpoint.
///
/// Use [`HashnodeClient::new`] for production or
/// [`HashnodeClient::with_endpoint`] to point at a mock server in tests.
pub struct HashnodeClient {
    client: Client,
    api_token: String,
    endpoint: Url,
}

impl std::fmt::Debug for HashnodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashnodeClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HashnodeClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QueryError::InvalidEndpoint`] if the
    /// configured URL does not parse.
    pub fn new(config: &ClientConfig) -> Result<Self, QueryError> {
        Self::with_endpoint(
            &config.api_token,
            &config.graphql_url,
            &config.user_agent,
            config.request_timeout_secs,
        )
    }

    /// Creates a client with an explicit endpoint (for testing with wiremock).
    ///
    /// `timeout_secs` of `None` leaves requests without an overall deadline;
    /// the connect phase is always bounded.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QueryError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        api_token: &str,
        endpoint: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, QueryError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| QueryError::InvalidEndpoint(format!("'{endpoint}': {e}")))?;

        Ok(Self {
            client,
            api_token: api_token.to_owned(),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the user's name, profile picture, and first publication's
    /// post views.
    ///
    /// The username is sent verbatim. An empty username is rejected before
    /// any request is made.
    ///
    /// # Errors
    ///
    /// - [`QueryError::EmptyUsername`] if `username` is empty.
    /// - [`QueryError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QueryError::Graphql`] if the response carries GraphQL errors.
    /// - [`QueryError::EmptyResponse`] if the response has no `data`.
    /// - [`QueryError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_user_views(&self, username: &str) -> Result<QueryResult, QueryError> {
        if username.is_empty() {
            return Err(QueryError::EmptyUsername);
        }

        tracing::debug!(username, endpoint = %self.endpoint, "dispatching GetUserViews");
        let request = GraphqlRequest::user_views(username);
        let envelope: GraphqlResponse<UserViewsData> = self
            .post_graphql(&request, &format!("GetUserViews(username={username})"))
            .await?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(QueryError::Graphql(messages.join("; ")));
        }

        let data = envelope.data.ok_or(QueryError::EmptyResponse)?;
        let result = QueryResult::from(data);
        tracing::debug!(
            username,
            found = result.user.is_some(),
            "GetUserViews completed"
        );
        Ok(result)
    }

    /// Posts a GraphQL request with the bearer token, asserts a 2xx status,
    /// and parses the response body.
    async fn post_graphql<T>(
        &self,
        request: &GraphqlRequest<'_>,
        context: &str,
    ) -> Result<T, QueryError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| QueryError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
