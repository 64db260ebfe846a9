use crate::aggregate::DateStyle;

pub const DEFAULT_GRAPHQL_URL: &str = "https://gql.hashnode.com/graphql";
pub const DEFAULT_USER_AGENT: &str = "hashpulse/0.1 (view-analytics)";
pub const DEFAULT_SHARE_CARD_URL: &str = "http://localhost:3000/generate-image";
pub const DEFAULT_SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Settings for the GraphQL client.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_token: String,
    pub graphql_url: String,
    pub user_agent: String,
    /// Overall per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
}

/// Settings for the share-link builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    pub card_url: String,
    pub intent_url: String,
    /// Append the user's profile picture to the share-card URL.
    pub include_avatar: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            card_url: DEFAULT_SHARE_CARD_URL.to_string(),
            intent_url: DEFAULT_SHARE_INTENT_URL.to_string(),
            include_avatar: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub share: ShareConfig,
    pub date_style: DateStyle,
    pub log_level: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"[redacted]")
            .field("graphql_url", &self.graphql_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
