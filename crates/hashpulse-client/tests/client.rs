//! Integration tests for `HashnodeClient` using wiremock HTTP mocks.

use hashpulse_client::{HashnodeClient, QueryError};
use hashpulse_core::{derive_series, derive_total, DateStyle};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> HashnodeClient {
    HashnodeClient::with_endpoint(
        "test-token",
        &format!("{base_url}/graphql"),
        "hashpulse-test/0.1",
        Some(5),
    )
    .expect("client construction should not fail")
}

fn alice_body() -> serde_json::Value {
    json!({
        "data": {
            "user": {
                "name": "Alice",
                "profilePicture": "https://cdn.example.com/alice.png",
                "publications": {
                    "edges": [{
                        "node": {
                            "posts": {
                                "edges": [
                                    {"node": {"title": "A", "views": 10, "publishedAt": "2024-01-01T00:00:00.000Z"}},
                                    {"node": {"title": "B", "views": 5, "publishedAt": "2024-02-01T00:00:00.000Z"}}
                                ]
                            }
                        }
                    }]
                }
            }
        }
    })
}

#[tokio::test]
async fn fetch_user_views_returns_parsed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "operationName": "GetUserViews",
            "variables": {"username": "alice"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_user_views("alice")
        .await
        .expect("should parse result");

    let user = result.user.as_ref().expect("user should be present");
    assert_eq!(user.name, "Alice");
    assert_eq!(
        user.profile_picture.as_deref(),
        Some("https://cdn.example.com/alice.png")
    );
    assert_eq!(derive_total(Some(&result)), 15);

    let series = derive_series(Some(&result), DateStyle::UsNumeric);
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["1/1/2024", "2/1/2024"]);
}

#[tokio::test]
async fn fetch_user_views_null_user_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": null}})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_user_views("doesnotexist")
        .await
        .expect("null user is not an error at the client layer");

    assert!(result.user.is_none());
    assert_eq!(derive_total(Some(&result)), 0);
    assert!(derive_series(Some(&result), DateStyle::UsNumeric).is_empty());
}

#[tokio::test]
async fn fetch_user_views_user_without_publications_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "user": {
                    "name": "Newbie",
                    "profilePicture": null,
                    "publications": {"edges": []}
                }
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_user_views("newbie").await.unwrap();

    assert!(result.user.is_some());
    assert_eq!(derive_total(Some(&result)), 0);
    assert!(derive_series(Some(&result), DateStyle::Iso).is_empty());
}

#[tokio::test]
async fn fetch_user_views_surfaces_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                {"message": "Invalid token"},
                {"message": "Try again later"}
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_user_views("alice").await.unwrap_err();

    assert!(
        matches!(err, QueryError::Graphql(ref msg) if msg == "Invalid token; Try again later"),
        "expected Graphql error, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_user_views_missing_data_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_user_views("alice").await.unwrap_err();
    assert!(matches!(err, QueryError::EmptyResponse), "got: {err:?}");
}

#[tokio::test]
async fn fetch_user_views_non_2xx_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_user_views("alice").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got: {err:?}");
}

#[tokio::test]
async fn fetch_user_views_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_user_views("alice").await.unwrap_err();
    assert!(
        matches!(err, QueryError::Deserialize { ref context, .. } if context.contains("alice")),
        "expected Deserialize error, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_user_views_empty_username_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_user_views("").await.unwrap_err();
    assert!(matches!(err, QueryError::EmptyUsername));
}

#[tokio::test]
async fn every_request_carries_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": null}})))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    for name in ["a", "b", "c"] {
        client.fetch_user_views(name).await.unwrap();
    }
}
