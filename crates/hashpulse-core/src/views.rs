//! Domain model for a user's view statistics.
//!
//! These types are the flattened form of the `GetUserViews` GraphQL response.
//! The client crate owns the `edges { node { … } }` wire shape and converts it
//! into these before handing results to callers.

use serde::{Deserialize, Serialize};

/// Result of one `GetUserViews` query.
///
/// `user` is `None` when the platform reports no such user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub profile_picture: Option<String>,
    /// Publications in API order. Only the first one is ever consulted.
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub views: u64,
    /// Raw ISO-8601 timestamp as returned by the API.
    pub published_at: String,
}

/// One point of the derived views-over-time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSeriesPoint {
    pub title: String,
    pub views: u64,
    pub date: String,
}

impl QueryResult {
    /// Convenience constructor for a result that found `user`.
    #[must_use]
    pub fn found(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self { user: None }
    }
}

impl Post {
    pub fn new(title: impl Into<String>, views: u64, published_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            views,
            published_at: published_at.into(),
        }
    }
}
