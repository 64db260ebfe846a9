//! The fixed `GetUserViews` GraphQL document and its request body.

use serde::Serialize;

pub const OPERATION_NAME: &str = "GetUserViews";

/// One publication, first 50 posts. These limits are part of the query shape.
pub const GET_USER_VIEWS: &str = r"query GetUserViews($username: String!) {
  user(username: $username) {
    name
    profilePicture
    publications(first: 1) {
      edges {
        node {
          posts(first: 50) {
            edges {
              node {
                title
                views
                publishedAt
              }
            }
          }
        }
      }
    }
  }
}";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: UserViewsVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct UserViewsVariables<'a> {
    pub username: &'a str,
}

impl<'a> GraphqlRequest<'a> {
    #[must_use]
    pub fn user_views(username: &'a str) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            query: GET_USER_VIEWS,
            variables: UserViewsVariables { username },
        }
    }
}
