//! GraphQL transport tests.
//!
//! # Invariants
//! - Exactly one POST per call, JSON body, Basic auth header
//! - HTTP status is checked before the body, `errors` before `data`

mod common;

use common::*;
use serde_json::{Map, Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};

async fn execute(
    server: &MockServer,
    variables: Option<&Map<String, Value>>,
) -> Result<Value, TransportError> {
    endpoints::execute(
        &Client::new(),
        &graphql_url(server),
        &test_credential(),
        "test",
        "query { viewer { id } }",
        variables,
        None,
    )
    .await
}

#[tokio::test]
async fn test_sends_query_with_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header(
            "authorization",
            wandb_client::build_auth_header(TEST_API_KEY).as_str(),
        ))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "query { viewer { id } }"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("viewer/viewer_ok.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let data = execute(&mock_server, None).await.unwrap();
    assert_eq!(data["viewer"]["username"], "ada");
}

#[tokio::test]
async fn test_sends_variables_when_present() {
    let mock_server = MockServer::start().await;

    let mut variables = Map::new();
    variables.insert("projectName".to_string(), json!("mnist-baseline"));

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({
            "query": "query { viewer { id } }",
            "variables": {"projectName": "mnist-baseline"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(execute(&mock_server, Some(&variables)).await.is_ok());
}

#[tokio::test]
async fn test_non_200_status_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    assert_eq!(
        execute(&mock_server, None).await,
        Err(TransportError::HttpStatus(502))
    );
}

#[tokio::test]
async fn test_unauthorized_status_keeps_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"errors": [{"message": "x"}]})),
        )
        .mount(&mock_server)
        .await;

    let err = execute(&mock_server, None).await.unwrap_err();
    assert_eq!(err, TransportError::HttpStatus(401));
    assert!(err.is_auth_status());
}

#[tokio::test]
async fn test_invalid_json_is_malformed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        execute(&mock_server, None).await,
        Err(TransportError::MalformedPayload(_))
    ));
}

#[tokio::test]
async fn test_errors_with_data_are_graphql_errors() {
    let mock_server = MockServer::start().await;
    mount_graphql(&mock_server, load_fixture("errors/graphql_errors.json")).await;

    assert_eq!(
        execute(&mock_server, None).await,
        Err(TransportError::GraphQLErrors(vec![
            "project not found".to_string()
        ]))
    );
}

#[tokio::test]
async fn test_error_entries_without_message_use_json_text() {
    let mock_server = MockServer::start().await;
    mount_graphql(&mock_server, load_fixture("errors/permission_denied.json")).await;

    let err = execute(&mock_server, None).await.unwrap_err();
    let TransportError::GraphQLErrors(messages) = err else {
        panic!("expected GraphQLErrors, got {err:?}");
    };
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "permission denied");
    assert!(messages[1].contains("FORBIDDEN"));
}

#[tokio::test]
async fn test_missing_data_is_malformed_payload() {
    let mock_server = MockServer::start().await;
    mount_graphql(&mock_server, json!({"errors": []})).await;

    assert!(matches!(
        execute(&mock_server, None).await,
        Err(TransportError::MalformedPayload(_))
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = endpoints::execute(
        &Client::new(),
        &format!("http://{addr}/graphql"),
        &test_credential(),
        "test",
        "query { viewer { id } }",
        None,
        None,
    )
    .await;

    assert!(matches!(result, Err(TransportError::NetworkFailure(_))));
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let result = endpoints::execute(
        &client,
        &graphql_url(&mock_server),
        &test_credential(),
        "test",
        "query { viewer { id } }",
        None,
        None,
    )
    .await;

    assert!(matches!(result, Err(TransportError::NetworkFailure(_))));
}

#[tokio::test]
async fn test_network_failure_does_not_leak_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = endpoints::execute(
        &Client::new(),
        &format!("http://{addr}/graphql"),
        &test_credential(),
        "test",
        "query { viewer { id } }",
        None,
        None,
    )
    .await
    .unwrap_err();

    assert!(!err.to_string().contains(TEST_API_KEY));
}
