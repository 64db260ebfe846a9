use super::*;

fn test_client(endpoint: &str) -> HashnodeClient {
    HashnodeClient::with_endpoint("test-token", endpoint, "hashpulse-test/0.1", Some(5))
        .expect("client construction should not fail")
}

#[test]
fn new_uses_configured_endpoint() {
    let config = ClientConfig {
        api_token: "secret".to_string(),
        graphql_url: "https://gql.hashnode.com/graphql".to_string(),
        user_agent: "hashpulse-test/0.1".to_string(),
        request_timeout_secs: None,
    };
    let client = HashnodeClient::new(&config).expect("client should build");
    assert_eq!(client.endpoint().as_str(), "https://gql.hashnode.com/graphql");
}

#[test]
fn with_endpoint_rejects_invalid_url() {
    let err = HashnodeClient::with_endpoint("t", "not a url", "ua", None).unwrap_err();
    assert!(
        matches!(err, QueryError::InvalidEndpoint(ref msg) if msg.contains("not a url")),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn debug_output_redacts_token() {
    let client = test_client("https://gql.hashnode.com/graphql");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[tokio::test]
async fn empty_username_is_rejected_without_request() {
    // Port 9 (discard) would fail the connect if a request were attempted.
    let client = test_client("http://127.0.0.1:9/graphql");
    let err = client.fetch_user_views("").await.unwrap_err();
    assert!(matches!(err, QueryError::EmptyUsername));
}
