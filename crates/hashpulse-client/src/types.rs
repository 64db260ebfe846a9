//! Wire types for the `GetUserViews` response.
//!
//! The API wraps every list in a Relay-style `edges { node }` connection.
//! Connections default to empty when absent or `null`, so a user without
//! publications deserializes cleanly and flows through as the empty case.

use hashpulse_core::{Post, Publication, QueryResult, User};
use serde::{Deserialize, Deserializer};

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserViewsData {
    #[serde(default)]
    pub user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireUser {
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publications: Connection<WirePublication>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePublication {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Connection<WirePost>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePost {
    pub title: String,
    pub views: u64,
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub edges: Option<Vec<Edge<T>>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: None }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.unwrap_or_default().into_iter().map(|e| e.node)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<UserViewsData> for QueryResult {
    fn from(data: UserViewsData) -> Self {
        QueryResult {
            user: data.user.map(User::from),
        }
    }
}

impl From<WireUser> for User {
    fn from(user: WireUser) -> Self {
        User {
            name: user.name,
            profile_picture: user.profile_picture,
            publications: user
                .publications
                .into_nodes()
                .map(|p| Publication {
                    posts: p.posts.into_nodes().map(Post::from).collect(),
                })
                .collect(),
        }
    }
}

impl From<WirePost> for Post {
    fn from(post: WirePost) -> Self {
        Post {
            title: post.title,
            views: post.views,
            published_at: post.published_at,
        }
    }
}
